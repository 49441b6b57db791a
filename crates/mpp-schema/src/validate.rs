//! # Shape Validation
//!
//! Runtime validation of decoded response bodies against [`Shape`]
//! descriptors.
//!
//! Each shape is compiled once into a JSON Schema (draft 2020-12) validator
//! and cached by the address of its `'static` descriptor. The `jsonschema`
//! crate decides conformance and reports where it failed; those raw errors
//! are then re-read against the shape so that every violation names the
//! declared field it concerns:
//!
//! - missing required fields are reported one by one at their own path,
//! - type mismatches carry the expected shape and the JSON type found,
//! - a failed union lists every branch that was attempted, each with its
//!   own violations.
//!
//! Validation is a trust boundary: no body reaches a caller without passing
//! through [`SchemaRegistry::validate`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use jsonschema::Validator;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::endpoint::EndpointDescriptor;
use crate::path::FieldPath;
use crate::shape::{json_type_name, Shape};

/// Error during shape validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The value did not conform to the shape.
    #[error("validation failed against shape '{shape_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the shape (endpoint) validated against.
        shape_name: String,
        /// Every violation found.
        violations: ValidationViolations,
    },

    /// The shape could not be compiled into a validator.
    #[error("validator build error for shape '{shape_name}': {reason}")]
    ValidatorBuildError {
        /// Name of the shape.
        shape_name: String,
        /// Compiler message.
        reason: String,
    },
}

/// What is wrong at one location.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// A required field is absent.
    Missing {
        /// Description of the declared shape.
        expected: String,
    },
    /// The value has the wrong JSON type.
    TypeMismatch {
        /// Description of the declared shape.
        expected: String,
        /// JSON type actually found.
        found: &'static str,
    },
    /// The key is not declared by a strict object shape.
    UnexpectedField,
    /// No branch of a union matched.
    NoMatchingBranch {
        /// One entry per attempted branch, in declaration order.
        branches: Vec<BranchFailure>,
    },
    /// Anything the shape walk cannot name more precisely.
    Other {
        /// Message from the underlying validator or decoder.
        message: String,
    },
}

/// Why one branch of a union was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchFailure {
    /// Position of the branch in the union.
    pub index: usize,
    /// Description of the branch shape.
    pub expected: String,
    /// The branch's own violations.
    pub violations: Vec<Violation>,
}

/// A single violation with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Where in the body the violation occurred.
    pub path: FieldPath,
    /// What is wrong there.
    pub kind: ViolationKind,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing { expected } => {
                write!(f, "missing required field (expected {expected})")
            }
            ViolationKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ViolationKind::UnexpectedField => f.write_str("field is not declared by the shape"),
            ViolationKind::NoMatchingBranch { branches } => {
                write!(f, "matched none of {} branches", branches.len())?;
                for branch in branches {
                    write!(f, "; [{}] {}", branch.index, branch.expected)?;
                    if let Some(first) = branch.violations.first() {
                        write!(f, " ({}: {})", first.path, first.kind)?;
                    }
                }
                Ok(())
            }
            ViolationKind::Other { message } => f.write_str(message),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.path, self.kind)
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Rendered paths of all violations, in report order.
    pub fn paths(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.path.to_string()).collect()
    }

    /// First violation at the given rendered path.
    pub fn at(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.path.to_string() == path)
    }

    /// Whether any violation, including those inside failed union branches,
    /// is reported at the given rendered path.
    pub fn mentions(&self, path: &str) -> bool {
        fn walk(violations: &[Violation], path: &str) -> bool {
            violations.iter().any(|v| {
                v.path.to_string() == path
                    || matches!(&v.kind, ViolationKind::NoMatchingBranch { branches }
                        if branches.iter().any(|b| walk(&b.violations, path)))
            })
        }
        walk(&self.violations, path)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compiled validators for shape descriptors.
///
/// `Send + Sync`; share it behind an `Arc`. Validators for the registered
/// endpoints are compiled at construction, any other shape (union branches,
/// ad-hoc shapes) on first use.
#[derive(Default)]
pub struct SchemaRegistry {
    compiled: RwLock<HashMap<usize, Arc<Validator>>>,
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("compiled", &self.compiled.read().len())
            .finish()
    }
}

impl SchemaRegistry {
    /// An empty registry; validators are compiled lazily.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the output shape of every given endpoint compiled.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidatorBuildError` naming the first
    /// endpoint whose shape does not compile.
    pub fn with_endpoints(
        endpoints: &[&'static EndpointDescriptor],
    ) -> Result<Self, SchemaValidationError> {
        let registry = Self::new();
        for endpoint in endpoints {
            registry.compiled(endpoint.name, endpoint.output)?;
        }
        Ok(registry)
    }

    /// Number of distinct shapes compiled so far.
    pub fn compiled_count(&self) -> usize {
        self.compiled.read().len()
    }

    fn compiled(
        &self,
        shape_name: &str,
        shape: &'static Shape,
    ) -> Result<Arc<Validator>, SchemaValidationError> {
        let key = shape as *const Shape as usize;
        if let Some(validator) = self.compiled.read().get(&key) {
            return Ok(Arc::clone(validator));
        }

        let schema = shape.to_json_schema();
        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts.build(&schema).map_err(|e| {
            SchemaValidationError::ValidatorBuildError {
                shape_name: shape_name.to_string(),
                reason: e.to_string(),
            }
        })?;

        let validator = Arc::new(validator);
        self.compiled.write().insert(key, Arc::clone(&validator));
        Ok(validator)
    }

    /// Whether `value` conforms to `shape`.
    pub fn conforms(&self, shape: &'static Shape, value: &Value) -> bool {
        self.compiled("(ad hoc)", shape)
            .map(|validator| validator.is_valid(value))
            .unwrap_or(false)
    }

    /// All violations of `value` against `shape`; empty when it conforms.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidatorBuildError` if the shape
    /// cannot be compiled.
    pub fn check(
        &self,
        shape_name: &str,
        shape: &'static Shape,
        value: &Value,
    ) -> Result<ValidationViolations, SchemaValidationError> {
        let mut out = Vec::new();
        self.collect(shape_name, shape, value, &FieldPath::root(), &mut out)?;
        if out.is_empty() {
            self.collect_integral(shape, value, &FieldPath::root(), &mut out);
        }
        Ok(ValidationViolations::new(out))
    }

    /// JSON Schema counts `3.0` as an integer; the decoded models hold `i64`.
    fn collect_integral(
        &self,
        shape: &'static Shape,
        value: &Value,
        path: &FieldPath,
        out: &mut Vec<Violation>,
    ) {
        match (*shape, value) {
            (Shape::Integer, Value::Number(n)) if n.as_i64().is_none() => out.push(Violation {
                path: path.clone(),
                kind: ViolationKind::TypeMismatch {
                    expected: shape.describe(),
                    found: "non-integral number",
                },
            }),
            (Shape::Array(item), Value::Array(items)) => {
                for (index, entry) in items.iter().enumerate() {
                    self.collect_integral(item, entry, &path.index(index), out);
                }
            }
            (Shape::Object(fields) | Shape::StrictObject(fields), Value::Object(map)) => {
                for field in fields.iter() {
                    if let Some(entry) = map.get(field.name) {
                        self.collect_integral(&field.shape, entry, &path.key(field.name), out);
                    }
                }
            }
            (Shape::Record(inner), Value::Object(map)) => {
                for (key, entry) in map {
                    self.collect_integral(inner, entry, &path.key(key.as_str()), out);
                }
            }
            (Shape::Nullable(inner), _) if !value.is_null() => {
                self.collect_integral(inner, value, path, out);
            }
            (Shape::Union(_), _) => {
                if let Some(branch) = shape
                    .branches()
                    .into_iter()
                    .find(|&branch| self.conforms(branch, value))
                {
                    self.collect_integral(branch, value, path, out);
                }
            }
            _ => {}
        }
    }

    /// Validate `value` and return it projected onto `shape`: keys the
    /// shape does not declare are dropped, everything declared is kept.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` listing every
    /// violation if the value does not conform.
    pub fn validate(
        &self,
        shape_name: &str,
        shape: &'static Shape,
        value: &Value,
    ) -> Result<Value, SchemaValidationError> {
        let violations = self.check(shape_name, shape, value)?;
        if !violations.is_empty() {
            return Err(SchemaValidationError::ValidationFailed {
                shape_name: shape_name.to_string(),
                violations,
            });
        }
        Ok(shape.project(value, &|branch, v| self.conforms(branch, v)))
    }

    /// Validate `value` and decode it into the Rust type paired with `shape`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` if the value does not
    /// conform, or if the conforming value does not fit `T` (reported at the
    /// root as [`ViolationKind::Other`]).
    pub fn validate_as<T: DeserializeOwned>(
        &self,
        shape_name: &str,
        shape: &'static Shape,
        value: &Value,
    ) -> Result<T, SchemaValidationError> {
        let projected = self.validate(shape_name, shape, value)?;
        serde_json::from_value(projected).map_err(|e| SchemaValidationError::ValidationFailed {
            shape_name: shape_name.to_string(),
            violations: ValidationViolations::new(vec![Violation {
                path: FieldPath::root(),
                kind: ViolationKind::Other {
                    message: format!("does not fit the output type: {e}"),
                },
            }]),
        })
    }

    fn collect(
        &self,
        shape_name: &str,
        shape: &'static Shape,
        value: &Value,
        base: &FieldPath,
        out: &mut Vec<Violation>,
    ) -> Result<(), SchemaValidationError> {
        let validator = self.compiled(shape_name, shape)?;
        let errors: Vec<(String, String, String)> = validator
            .iter_errors(value)
            .map(|e| {
                (
                    e.instance_path.to_string(),
                    e.schema_path.to_string(),
                    e.to_string(),
                )
            })
            .collect();

        // One report per (location, owning shape, keyword); `required` may
        // fire once per missing property but is explained in a single pass.
        let mut seen = HashSet::new();
        for (instance_ptr, schema_ptr, message) in errors {
            let path = base.join(&FieldPath::from_pointer(&instance_ptr, value));
            let instance = value.pointer(&instance_ptr).unwrap_or(&Value::Null);
            match shape.locate(&schema_ptr) {
                Some((owner, keyword)) => {
                    let key = (instance_ptr, owner as *const Shape as usize, keyword.clone());
                    if seen.insert(key) {
                        self.explain(shape_name, owner, &keyword, instance, path, message, out)?;
                    }
                }
                None => {
                    if seen.insert((instance_ptr, 0, schema_ptr)) {
                        out.push(Violation {
                            path,
                            kind: ViolationKind::Other { message },
                        });
                    }
                }
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn explain(
        &self,
        shape_name: &str,
        owner: &'static Shape,
        keyword: &str,
        instance: &Value,
        path: FieldPath,
        message: String,
        out: &mut Vec<Violation>,
    ) -> Result<(), SchemaValidationError> {
        match (keyword, *owner) {
            ("required", Shape::Object(fields) | Shape::StrictObject(fields)) => {
                for field in fields
                    .iter()
                    .filter(|f| f.required && instance.get(f.name).is_none())
                {
                    out.push(Violation {
                        path: path.key(field.name),
                        kind: ViolationKind::Missing {
                            expected: field.shape.describe(),
                        },
                    });
                }
            }
            ("additionalProperties", Shape::StrictObject(fields)) => {
                if let Some(map) = instance.as_object() {
                    for key in map.keys().filter(|k| !fields.iter().any(|f| f.name == *k)) {
                        out.push(Violation {
                            path: path.key(key.as_str()),
                            kind: ViolationKind::UnexpectedField,
                        });
                    }
                }
            }
            ("additionalProperties", Shape::Record(inner)) => {
                if let Some(map) = instance.as_object() {
                    for (key, entry) in map {
                        self.collect(shape_name, inner, entry, &path.key(key.as_str()), out)?;
                    }
                }
            }
            ("type", _) => out.push(Violation {
                path,
                kind: ViolationKind::TypeMismatch {
                    expected: owner.describe(),
                    found: json_type_name(instance),
                },
            }),
            ("anyOf", Shape::Nullable(inner)) => {
                // `null` was not it, so only the inner shape is worth reporting.
                let mut inner_violations = Vec::new();
                self.collect(shape_name, inner, instance, &path, &mut inner_violations)?;
                for mut violation in inner_violations {
                    if violation.path == path {
                        if let ViolationKind::TypeMismatch { expected, .. } = &mut violation.kind {
                            *expected = owner.describe();
                        }
                    }
                    out.push(violation);
                }
            }
            ("anyOf", Shape::Union(_)) => {
                let mut branches = Vec::new();
                for (index, branch) in owner.branches().into_iter().enumerate() {
                    let mut violations = Vec::new();
                    self.collect(shape_name, branch, instance, &path, &mut violations)?;
                    branches.push(BranchFailure {
                        index,
                        expected: branch.describe(),
                        violations,
                    });
                }
                out.push(Violation {
                    path,
                    kind: ViolationKind::NoMatchingBranch { branches },
                });
            }
            _ => out.push(Violation {
                path,
                kind: ViolationKind::Other { message },
            }),
        }
        Ok(())
    }
}
