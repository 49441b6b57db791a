//! Investment profiles and the categories they are grouped in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::hydra::{collection_shape, HydraCollection};
use crate::shape::Shape;
use crate::v1::TOKEN_ONLY;
use crate::{optional, required};

/// Categories come in two variants: described, or with a null description.
pub const INVEST_PROFILE_CATEGORY: Shape = Shape::Union(&[
    Shape::Object(&[
        required!("@id", Shape::String),
        required!("@type", Shape::String),
        required!("id", Shape::Integer),
        required!("name", Shape::String),
        required!("slug", Shape::String),
        required!("thematic", Shape::Nullable(&Shape::Boolean)),
        optional!("position", Shape::Unknown),
        required!("color", Shape::String),
        required!("description", Shape::String),
        required!("investProfiles", Shape::Array(&Shape::String)),
    ]),
    Shape::Object(&[
        required!("@id", Shape::String),
        required!("@type", Shape::String),
        required!("id", Shape::Integer),
        required!("name", Shape::String),
        required!("slug", Shape::String),
        required!("thematic", Shape::Nullable(&Shape::Boolean)),
        optional!("position", Shape::Unknown),
        required!("color", Shape::String),
        optional!("description", Shape::Null),
        required!("investProfiles", Shape::Array(&Shape::String)),
    ]),
]);

pub const INVEST_PROFILE_CATEGORIES_OUTPUT: Shape = collection_shape!(INVEST_PROFILE_CATEGORY);

pub const PROFILE_CATEGORY: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("name", Shape::String),
    required!("slug", Shape::String),
    required!("thematic", Shape::Boolean),
    optional!("position", Shape::Unknown),
    required!("color", Shape::String),
    required!("description", Shape::Nullable(&Shape::String)),
]);

pub const INVEST_PROFILE: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("name", Shape::String),
    required!("slug", Shape::String),
    required!("thematic", Shape::Nullable(&Shape::Boolean)),
    required!("position", Shape::Nullable(&Shape::String)),
    required!(
        "minimumAmount",
        Shape::Object(&[
            required!("apicil", Shape::Number),
            required!("generali", Shape::Number),
        ])
    ),
    required!("investProfileCategory", PROFILE_CATEGORY),
]);

pub const INVEST_PROFILES_OUTPUT: Shape = collection_shape!(INVEST_PROFILE);

pub const INVEST_PROFILE_CATEGORIES: EndpointDescriptor = EndpointDescriptor {
    name: "invest_profile_categories",
    method: HttpMethod::Get,
    path: "v1/invest_profile_categories",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_ONLY,
    output: &INVEST_PROFILE_CATEGORIES_OUTPUT,
};

pub const INVEST_PROFILES: EndpointDescriptor = EndpointDescriptor {
    name: "invest_profiles",
    method: HttpMethod::Get,
    path: "v1/invest_profiles",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_ONLY,
    output: &INVEST_PROFILES_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestProfileCategory {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub thematic: Option<bool>,
    #[serde(default)]
    pub position: Value,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    pub invest_profiles: Vec<String>,
}

pub type InvestProfileCategories = HydraCollection<InvestProfileCategory>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestProfile {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub thematic: Option<bool>,
    pub position: Option<String>,
    pub minimum_amount: MinimumAmount,
    pub invest_profile_category: ProfileCategory,
}

/// Minimum first investment per insurer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumAmount {
    pub apicil: f64,
    pub generali: f64,
}

/// The category as embedded in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCategory {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub thematic: bool,
    #[serde(default)]
    pub position: Value,
    pub color: String,
    pub description: Option<String>,
}

pub type InvestProfiles = HydraCollection<InvestProfile>;

pub struct GetInvestProfileCategories;

impl Endpoint for GetInvestProfileCategories {
    type Output = InvestProfileCategories;
    const DESCRIPTOR: &'static EndpointDescriptor = &INVEST_PROFILE_CATEGORIES;
}

pub struct GetInvestProfiles;

impl Endpoint for GetInvestProfiles {
    type Output = InvestProfiles;
    const DESCRIPTOR: &'static EndpointDescriptor = &INVEST_PROFILES;
}
