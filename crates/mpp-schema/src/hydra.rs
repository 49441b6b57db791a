//! JSON-LD / Hydra envelope pieces shared by the collection endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shape::Shape;
use crate::{optional, required};

/// A Hydra collection with the common envelope and an optional `hydra:view`.
macro_rules! collection_shape {
    ($member:path) => {
        $crate::shape::Shape::Object(&[
            $crate::required!("@context", $crate::shape::Shape::String),
            $crate::required!("@id", $crate::shape::Shape::String),
            $crate::required!("@type", $crate::shape::Shape::String),
            $crate::required!("hydra:member", $crate::shape::Shape::Array(&$member)),
            $crate::required!("hydra:totalItems", $crate::shape::Shape::Integer),
            $crate::optional!("hydra:view", $crate::hydra::VIEW),
        ])
    };
}
pub(crate) use collection_shape;

/// `hydra:view` pagination pointer.
pub const VIEW: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
]);

macro_rules! search_shape {
    ($property:expr) => {
        Shape::Object(&[
            required!("@type", Shape::String),
            required!("hydra:template", Shape::String),
            required!("hydra:variableRepresentation", Shape::String),
            required!(
                "hydra:mapping",
                Shape::Array(&Shape::Object(&[
                    required!("@type", Shape::String),
                    required!("variable", Shape::String),
                    $property,
                    required!("required", Shape::Boolean),
                ]))
            ),
        ])
    };
}

/// `hydra:search` template whose mappings all name a property.
pub const SEARCH: Shape = search_shape!(required!("property", Shape::String));

/// `hydra:search` template whose mapping properties may be null or absent.
pub const SEARCH_NULLABLE_PROPERTY: Shape = search_shape!(optional!("property", Shape::Unknown));

/// JSON-LD `@context` given inline as a term → IRI map.
pub type Vocabulary = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraView {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
}

/// Paged collection envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraCollection<T> {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    #[serde(rename = "hydra:member")]
    pub members: Vec<T>,
    #[serde(rename = "hydra:totalItems")]
    pub total_items: i64,
    #[serde(
        rename = "hydra:view",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub view: Option<HydraView>,
}

impl<T> HydraCollection<T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }
}

impl<'a, T> IntoIterator for &'a HydraCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraSearch {
    #[serde(rename = "@type")]
    pub resource_type: String,
    #[serde(rename = "hydra:template")]
    pub template: String,
    #[serde(rename = "hydra:variableRepresentation")]
    pub variable_representation: String,
    #[serde(rename = "hydra:mapping")]
    pub mapping: Vec<HydraMapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydraMapping {
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub variable: String,
    /// A property name, or `null` for filters not bound to one.
    #[serde(default)]
    pub property: Value,
    pub required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaRegistry;
    use serde_json::json;

    const ITEM: Shape = Shape::Object(&[required!("slug", Shape::String)]);
    static ITEMS: Shape = collection_shape!(ITEM);

    #[test]
    fn collection_accepts_missing_view() {
        let registry = SchemaRegistry::new();
        let body = json!({
            "@context": "/v1/contexts/KycCategories",
            "@id": "/v1/kyc_categories",
            "@type": "hydra:Collection",
            "hydra:member": [{ "slug": "patrimoine" }],
            "hydra:totalItems": 1
        });
        let collection: HydraCollection<serde_json::Value> =
            registry.validate_as("items", &ITEMS, &body).unwrap();
        assert_eq!(collection.len(), 1);
        assert!(collection.view.is_none());
    }

    #[test]
    fn member_violations_are_indexed() {
        let registry = SchemaRegistry::new();
        let body = json!({
            "@context": "c",
            "@id": "i",
            "@type": "hydra:Collection",
            "hydra:member": [{ "slug": "a" }, { "slug": 2 }],
            "hydra:totalItems": 2,
            "hydra:view": { "@id": "/v1/kyc_categories?page=1" }
        });
        let violations = registry.check("items", &ITEMS, &body).unwrap();
        let mut paths = violations.paths();
        paths.sort();
        assert_eq!(paths, vec!["hydra:member[1].slug", "hydra:view.@type"]);
    }

    #[test]
    fn search_mapping_property_may_be_null() {
        static LOOSE: Shape = SEARCH_NULLABLE_PROPERTY;
        static STRICT: Shape = SEARCH;
        let registry = SchemaRegistry::new();
        let body = json!({
            "@type": "hydra:IriTemplate",
            "hydra:template": "/v1/user_kycs/1/available_products{?enabled}",
            "hydra:variableRepresentation": "BasicRepresentation",
            "hydra:mapping": [
                { "@type": "IriTemplateMapping", "variable": "enabled", "property": null, "required": false }
            ]
        });
        let search: HydraSearch = registry.validate_as("search", &LOOSE, &body).unwrap();
        assert!(search.mapping[0].property.is_null());
        assert_eq!(
            registry.check("search", &STRICT, &body).unwrap().paths(),
            vec!["hydra:mapping[0].property"]
        );
    }
}
