//! Field paths in the dotted/indexed form used by violation reports,
//! e.g. `investmentAccounts[2].provider.id`.

use std::fmt;

use serde_json::Value;

use crate::shape::unescape_pointer_segment;

/// One step into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

/// Location of a value inside a response body. Empty means the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a key under this path.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Path of an array item under this path.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Append a path that is relative to this one.
    pub fn join(&self, relative: &FieldPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(relative.segments.iter().cloned());
        Self { segments }
    }

    /// Convert a JSON Pointer into a field path.
    ///
    /// The document is walked alongside the pointer so that numeric
    /// segments are rendered as indices only when they address an array;
    /// a numeric object key (`"2021"` in a yearly record) stays a key.
    pub fn from_pointer(pointer: &str, document: &Value) -> Self {
        let mut segments = Vec::new();
        let mut current = Some(document);
        for raw in pointer.split('/').skip(1) {
            let segment = unescape_pointer_segment(raw);
            if let Some(Value::Array(items)) = current {
                if let Ok(index) = segment.parse::<usize>() {
                    current = items.get(index);
                    segments.push(PathSegment::Index(index));
                    continue;
                }
            }
            current = current.and_then(|v| v.get(segment.as_str()));
            segments.push(PathSegment::Key(segment));
        }
        Self { segments }
    }

    /// Whether this is the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The individual steps.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_dotted_and_indexed() {
        let path = FieldPath::root()
            .key("investmentAccounts")
            .index(2)
            .key("provider")
            .key("id");
        assert_eq!(path.to_string(), "investmentAccounts[2].provider.id");
    }

    #[test]
    fn root_renders_marker() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert!(FieldPath::root().is_root());
    }

    #[test]
    fn root_array_index_has_no_leading_dot() {
        assert_eq!(FieldPath::root().index(0).key("slug").to_string(), "[0].slug");
    }

    #[test]
    fn pointer_uses_document_to_tell_indices_from_keys() {
        let doc = json!({
            "investmentAccounts": [{}, {}, { "provider": { "id": 1 } }],
            "history": { "2021": "x" }
        });
        assert_eq!(
            FieldPath::from_pointer("/investmentAccounts/2/provider/id", &doc).to_string(),
            "investmentAccounts[2].provider.id"
        );
        assert_eq!(
            FieldPath::from_pointer("/history/2021", &doc).to_string(),
            "history.2021"
        );
    }

    #[test]
    fn pointer_unescapes_segments() {
        let doc = json!({ "a/b": { "c~d": 1 } });
        let path = FieldPath::from_pointer("/a~1b/c~0d", &doc);
        assert_eq!(
            path.segments(),
            &[PathSegment::Key("a/b".into()), PathSegment::Key("c~d".into())]
        );
    }

    #[test]
    fn join_appends_relative_path() {
        let base = FieldPath::root().key("hydra:member").index(3);
        let rel = FieldPath::root().key("description");
        assert_eq!(base.join(&rel).to_string(), "hydra:member[3].description");
    }
}
