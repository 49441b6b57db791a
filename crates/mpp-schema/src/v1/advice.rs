//! Advice issued by an advisor, and the per-account advice DTO with the
//! recommended fund allocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::hydra::Vocabulary;
use crate::shape::Shape;
use crate::v1::{TOKEN_AND_ACCOUNT_ID, TOKEN_AND_ADVICE_ID};
use crate::{optional, required};

pub const ADVISOR: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("firstname", Shape::String),
    required!("gender", Shape::String),
    required!("picture", Shape::String),
    required!("calendlyCalendarUrl", Shape::String),
]);

pub const ADVICE_SUBPACKAGE: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("slug", Shape::String),
    required!("enabled", Shape::Boolean),
    required!("position", Shape::Integer),
    required!("title", Shape::String),
    required!("subtitle", Shape::String),
    required!("description", Shape::String),
    required!("picture", Shape::String),
    required!("ctaText", Shape::String),
    required!("waitingAdviceVideo", Shape::String),
    optional!("genericVideo", Shape::String),
]);

/// Subpackage as embedded in a package: always has a generic video.
pub const DEFAULT_ADVICE_SUBPACKAGE: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("slug", Shape::String),
    required!("enabled", Shape::Boolean),
    required!("position", Shape::Integer),
    required!("title", Shape::String),
    required!("subtitle", Shape::String),
    required!("description", Shape::String),
    required!("picture", Shape::String),
    required!("ctaText", Shape::String),
    required!("waitingAdviceVideo", Shape::String),
    required!("genericVideo", Shape::String),
]);

pub const ADVICE_PACKAGE: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("slug", Shape::String),
    required!("enabled", Shape::Boolean),
    required!("position", Shape::Integer),
    required!("title", Shape::String),
    required!("subtitle", Shape::String),
    required!("description", Shape::String),
    required!("picture", Shape::String),
    required!("bulletPoints", Shape::Array(&Shape::String)),
    required!("ctaText", Shape::String),
    required!("defaultAdviceSubpackage", DEFAULT_ADVICE_SUBPACKAGE),
]);

pub const ADVICE_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("status", Shape::String),
    required!("advisor", ADVISOR),
    required!("language", Shape::Array(&Shape::Unknown)),
    required!("video", Shape::String),
    required!("generalAdvice", Shape::String),
    required!("buyAdvice", Shape::String),
    required!("sellAdvice", Shape::String),
    required!("dashboardAdvice", Shape::String),
    required!("inconsistent", Shape::Boolean),
    required!("suggestedInvestmentAccountProvider", Shape::String),
    required!("suggestedAdvicePackage", ADVICE_PACKAGE),
    required!("selectedAdvicePackage", ADVICE_PACKAGE),
    required!("suggestedAdviceSubpackage", ADVICE_SUBPACKAGE),
    required!("selectedAdviceSubpackage", ADVICE_SUBPACKAGE),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

const FUND_CONTEXT: Shape = Shape::Object(&[
    required!("@vocab", Shape::String),
    required!("amount", Shape::String),
    required!("dici", Shape::String),
    required!("hydra", Shape::String),
    required!("isin", Shape::String),
    required!("name", Shape::String),
    required!("percent", Shape::String),
    required!("slug", Shape::String),
    required!("type", Shape::String),
]);

pub const ALLOCATED_FUND: Shape = Shape::Object(&[
    required!("@context", FUND_CONTEXT),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("amount", Shape::Number),
    required!("dici", Shape::String),
    required!("isin", Shape::String),
    required!("name", Shape::String),
    required!("percent", Shape::Number),
    required!("slug", Shape::String),
    required!("type", Shape::String),
]);

const ALLOCATION_CONTEXT: Shape = Shape::Object(&[
    required!("@vocab", Shape::String),
    required!("amount", Shape::String),
    required!("funds", Shape::String),
    required!("hydra", Shape::String),
    required!("name", Shape::String),
    required!("percent", Shape::String),
    required!("slug", Shape::String),
    required!("type", Shape::String),
]);

pub const ALLOCATION: Shape = Shape::Object(&[
    required!("@context", ALLOCATION_CONTEXT),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("amount", Shape::Number),
    required!("funds", Shape::Array(&ALLOCATED_FUND)),
    required!("name", Shape::String),
    required!("percent", Shape::Number),
    required!("slug", Shape::String),
    required!("type", Shape::String),
]);

pub const MPP_CHOICE: Shape = Shape::Object(&[
    required!(
        "@context",
        Shape::Object(&[
            required!("@vocab", Shape::String),
            required!("automatic", Shape::String),
            required!("hydra", Shape::String),
            required!("inconsistent", Shape::String),
            required!("initialAmount", Shape::String),
            required!("initialDistribution", Shape::String),
            required!("monthlyAmount", Shape::String),
            required!("monthlyDistribution", Shape::String),
            required!("splitDuration", Shape::String),
            required!("trustLevel", Shape::String),
        ])
    ),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("automatic", Shape::Boolean),
    required!("inconsistent", Shape::Boolean),
    required!("initialAmount", Shape::Number),
    required!("initialDistribution", Shape::Array(&ALLOCATION)),
    required!("monthlyAmount", Shape::Number),
    required!("monthlyDistribution", Shape::Array(&ALLOCATION)),
    required!("splitDuration", Shape::Integer),
]);

pub const ADVICE_DTO_OUTPUT: Shape = Shape::Object(&[
    required!(
        "@context",
        Shape::Object(&[
            required!("@vocab", Shape::String),
            required!("adviceId", Shape::String),
            required!("advisor", Shape::String),
            required!("hydra", Shape::String),
            required!("introVideoLinkProvided", Shape::String),
            required!("mppChoice", Shape::String),
            required!("provider", Shape::String),
            required!("userChoice", Shape::String),
            required!("video", Shape::String),
        ])
    ),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("adviceId", Shape::String),
    required!(
        "advisor",
        Shape::Object(&[
            required!("@context", Shape::String),
            required!("@id", Shape::String),
            required!("@type", Shape::String),
            required!("calendlyCalendarUrl", Shape::String),
            required!("firstname", Shape::String),
            required!("lastname", Shape::String),
        ])
    ),
    required!("introVideoLinkProvided", Shape::Boolean),
    required!("mppChoice", MPP_CHOICE),
    required!("provider", Shape::String),
]);

pub const ADVICE: EndpointDescriptor = EndpointDescriptor {
    name: "advice",
    method: HttpMethod::Get,
    path: "v1/advice/{adviceId}",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_ADVICE_ID,
    output: &ADVICE_OUTPUT,
};

pub const ADVICE_DTO: EndpointDescriptor = EndpointDescriptor {
    name: "advice_dto",
    method: HttpMethod::Get,
    path: "v1/user_investment_accounts/{userInvestmentAccountId}/advice_dto",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_ACCOUNT_ID,
    output: &ADVICE_DTO_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub advisor: Advisor,
    pub language: Vec<Value>,
    pub video: String,
    pub general_advice: String,
    pub buy_advice: String,
    pub sell_advice: String,
    pub dashboard_advice: String,
    pub inconsistent: bool,
    pub suggested_investment_account_provider: String,
    pub suggested_advice_package: AdvicePackage,
    pub selected_advice_package: AdvicePackage,
    pub suggested_advice_subpackage: AdviceSubpackage,
    pub selected_advice_subpackage: AdviceSubpackage,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub firstname: String,
    pub gender: String,
    pub picture: String,
    pub calendly_calendar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvicePackage {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub slug: String,
    pub enabled: bool,
    pub position: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub picture: String,
    pub bullet_points: Vec<String>,
    pub cta_text: String,
    pub default_advice_subpackage: AdviceSubpackage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceSubpackage {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub slug: String,
    pub enabled: bool,
    pub position: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub picture: String,
    pub cta_text: String,
    pub waiting_advice_video: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_video: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceDto {
    #[serde(rename = "@context")]
    pub context: Vocabulary,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub advice_id: String,
    pub advisor: DtoAdvisor,
    pub intro_video_link_provided: bool,
    pub mpp_choice: MppChoice,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DtoAdvisor {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub calendly_calendar_url: String,
    pub firstname: String,
    pub lastname: String,
}

/// The allocation the platform recommends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MppChoice {
    #[serde(rename = "@context")]
    pub context: Vocabulary,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub automatic: bool,
    pub inconsistent: bool,
    pub initial_amount: f64,
    pub initial_distribution: Vec<Allocation>,
    pub monthly_amount: f64,
    pub monthly_distribution: Vec<Allocation>,
    pub split_duration: i64,
}

/// One asset class of a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "@context")]
    pub context: Vocabulary,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub amount: f64,
    pub funds: Vec<AllocatedFund>,
    pub name: String,
    pub percent: f64,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedFund {
    #[serde(rename = "@context")]
    pub context: Vocabulary,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub amount: f64,
    pub dici: String,
    pub isin: String,
    pub name: String,
    pub percent: f64,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub struct GetAdvice;

impl Endpoint for GetAdvice {
    type Output = Advice;
    const DESCRIPTOR: &'static EndpointDescriptor = &ADVICE;
}

pub struct GetAdviceDto;

impl Endpoint for GetAdviceDto {
    type Output = AdviceDto;
    const DESCRIPTOR: &'static EndpointDescriptor = &ADVICE_DTO;
}
