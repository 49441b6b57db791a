//! # Shape Descriptors
//!
//! Declarative, `const`-constructible descriptions of the JSON the backend
//! exchanges. A [`Shape`] is compiled to a JSON Schema (draft 2020-12)
//! document for validation by the `jsonschema` crate, and is walked directly
//! when a violation needs to be explained in terms of the declared fields.
//!
//! Shapes only ever borrow `'static` data, so every descriptor in the
//! registry is a plain `const` item with no runtime construction.
//!
//! ```
//! use mpp_schema::{optional, required, Shape};
//!
//! const PROVIDER: Shape = Shape::Object(&[
//!     required!("id", Shape::String),
//!     required!("minimumFirstInvestment", Shape::Number),
//!     optional!("description", Shape::Nullable(&Shape::String)),
//! ]);
//!
//! assert_eq!(PROVIDER.describe(), "object");
//! ```

use serde_json::{json, Map, Value};

/// Declares a field that must be present.
#[macro_export]
macro_rules! required {
    ($name:literal, $shape:expr) => {
        $crate::shape::Field {
            name: $name,
            shape: $shape,
            required: true,
        }
    };
}

/// Declares a field that may be absent; when present it must match.
#[macro_export]
macro_rules! optional {
    ($name:literal, $shape:expr) => {
        $crate::shape::Field {
            name: $name,
            shape: $shape,
            required: false,
        }
    };
}

/// Structural description of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A JSON string.
    String,
    /// Any JSON number.
    Number,
    /// A JSON number without a fractional part.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// Exactly `null`.
    Null,
    /// Any JSON value, `null` included.
    Unknown,
    /// An array whose items all match the inner shape.
    Array(&'static Shape),
    /// An object with declared fields. Undeclared keys are ignored.
    Object(&'static [Field]),
    /// An object with declared fields. Undeclared keys are violations.
    StrictObject(&'static [Field]),
    /// A string-keyed map whose values all match the inner shape.
    Record(&'static Shape),
    /// The inner shape, or `null`.
    Nullable(&'static Shape),
    /// The first matching branch wins.
    Union(&'static [Shape]),
}

/// One named member of an object shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// JSON key, verbatim (`"@id"`, `"hydra:member"`, ...).
    pub name: &'static str,
    /// Shape of the value under `name`.
    pub shape: Shape,
    /// Whether an absent key is a violation.
    pub required: bool,
}

/// `null`, as a `'static` shape for nullable branch lookups.
pub(crate) static NULL_SHAPE: Shape = Shape::Null;

impl Shape {
    /// Short human-readable name used in violation messages.
    pub fn describe(&self) -> String {
        match self {
            Shape::String => "string".into(),
            Shape::Number => "number".into(),
            Shape::Integer => "integer".into(),
            Shape::Boolean => "boolean".into(),
            Shape::Null => "null".into(),
            Shape::Unknown => "any".into(),
            Shape::Array(inner) => format!("array<{}>", inner.describe()),
            Shape::Object(_) | Shape::StrictObject(_) => "object".into(),
            Shape::Record(inner) => format!("record<{}>", inner.describe()),
            Shape::Nullable(inner) => format!("{} | null", inner.describe()),
            Shape::Union(branches) => branches
                .iter()
                .map(Shape::describe)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }

    /// Declared fields when this is an object shape.
    pub fn fields(&self) -> Option<&'static [Field]> {
        match *self {
            Shape::Object(fields) | Shape::StrictObject(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a declared field by its JSON key.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields()?.iter().find(|f| f.name == name)
    }

    /// Alternatives tried for a union-like shape, in order.
    pub(crate) fn branches(&'static self) -> Vec<&'static Shape> {
        match *self {
            Shape::Nullable(inner) => vec![inner, &NULL_SHAPE],
            Shape::Union(branches) => branches.iter().collect(),
            _ => vec![self],
        }
    }

    /// Compile to a JSON Schema (draft 2020-12) document.
    pub fn to_json_schema(&self) -> Value {
        match self {
            Shape::String => json!({ "type": "string" }),
            Shape::Number => json!({ "type": "number" }),
            Shape::Integer => json!({ "type": "integer" }),
            Shape::Boolean => json!({ "type": "boolean" }),
            Shape::Null => json!({ "type": "null" }),
            Shape::Unknown => json!({}),
            Shape::Array(inner) => json!({
                "type": "array",
                "items": inner.to_json_schema(),
            }),
            Shape::Object(fields) => object_schema(fields, false),
            Shape::StrictObject(fields) => object_schema(fields, true),
            Shape::Record(inner) => json!({
                "type": "object",
                "additionalProperties": inner.to_json_schema(),
            }),
            Shape::Nullable(inner) => json!({
                "anyOf": [inner.to_json_schema(), { "type": "null" }],
            }),
            Shape::Union(branches) => json!({
                "anyOf": branches.iter().map(Shape::to_json_schema).collect::<Vec<_>>(),
            }),
        }
    }

    /// Map a schema location produced by the compiled JSON Schema back onto
    /// the shape that owns the failing keyword.
    ///
    /// Returns the owning shape and the keyword (`"type"`, `"required"`,
    /// `"anyOf"`, ...). `None` if the location does not belong to this shape.
    pub(crate) fn locate(&'static self, schema_path: &str) -> Option<(&'static Shape, String)> {
        let segments: Vec<String> = schema_path
            .split('/')
            .skip(1)
            .map(unescape_pointer_segment)
            .collect();

        let mut shape: &'static Shape = self;
        let mut i = 0;
        while i < segments.len() {
            let keyword = segments[i].as_str();
            let has_next = i + 1 < segments.len();
            match (*shape, keyword) {
                (Shape::Object(fields) | Shape::StrictObject(fields), "properties") if has_next => {
                    let name = segments[i + 1].as_str();
                    shape = &fields.iter().find(|f| f.name == name)?.shape;
                    i += 2;
                }
                (Shape::Array(inner), "items") => {
                    shape = inner;
                    i += 1;
                }
                (Shape::Record(inner), "additionalProperties") if has_next => {
                    shape = inner;
                    i += 1;
                }
                (Shape::Nullable(_) | Shape::Union(_), "anyOf") if has_next => {
                    let index: usize = segments[i + 1].parse().ok()?;
                    shape = *shape.branches().get(index)?;
                    i += 2;
                }
                (_, keyword) => return Some((shape, keyword.to_string())),
            }
        }
        None
    }

    /// Keep only what this shape declares.
    ///
    /// `choose` picks the matching branch of a union; the registry passes a
    /// compiled-validator check.
    pub(crate) fn project(
        &'static self,
        value: &Value,
        choose: &dyn Fn(&'static Shape, &Value) -> bool,
    ) -> Value {
        match (*self, value) {
            (Shape::Object(fields) | Shape::StrictObject(fields), Value::Object(map)) => {
                let mut out = Map::new();
                for field in fields {
                    if let Some(v) = map.get(field.name) {
                        out.insert(field.name.to_string(), field.shape.project(v, choose));
                    }
                }
                Value::Object(out)
            }
            (Shape::Array(inner), Value::Array(items)) => {
                Value::Array(items.iter().map(|v| inner.project(v, choose)).collect())
            }
            (Shape::Record(inner), Value::Object(map)) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), inner.project(v, choose)))
                    .collect(),
            ),
            (Shape::Nullable(_), Value::Null) => Value::Null,
            (Shape::Nullable(inner), other) => inner.project(other, choose),
            (Shape::Union(branches), other) => branches
                .iter()
                .find(|&b| choose(b, other))
                .map_or_else(|| other.clone(), |b| b.project(other, choose)),
            (_, other) => other.clone(),
        }
    }
}

fn object_schema(fields: &[Field], strict: bool) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in fields {
        properties.insert(field.name.to_string(), field.shape.to_json_schema());
        if field.required {
            required.push(Value::String(field.name.to_string()));
        }
    }
    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }
    if strict {
        schema.insert("additionalProperties".into(), Value::Bool(false));
    }
    Value::Object(schema)
}

/// Undo JSON Pointer escaping (`~1` → `/`, `~0` → `~`).
pub(crate) fn unescape_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// JSON type name of a value, as used in mismatch messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
