//! Know-your-customer records, the questionnaire, and what a KYC unlocks:
//! eligible products and the consulting analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::hydra::{self, collection_shape, HydraCollection, HydraSearch, HydraView};
use crate::shape::Shape;
use crate::v1::{TOKEN_AND_KYC_ID, TOKEN_AND_PROVIDER, TOKEN_AND_USER_ID, TOKEN_ONLY};
use crate::{optional, required};

pub const KYC_ADVICE: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("status", Shape::String),
    required!("video", Shape::String),
    required!("inconsistent", Shape::Boolean),
    required!("suggestedInvestmentAccountProvider", Shape::String),
    required!("format", Shape::String),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const KYC_ANSWER: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    optional!("value", Shape::String),
    required!("valid", Shape::Boolean),
    required!("question", Shape::String),
    optional!("answer", Shape::String),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const USER_KYC: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("status", Shape::String),
    required!("currentStep", Shape::String),
    required!("lastNode", Shape::String),
    optional!("advice", KYC_ADVICE),
    required!("investmentAccount", Shape::String),
    required!("user", Shape::String),
    required!("userKycAnswers", Shape::Array(&KYC_ANSWER)),
    required!("fastAdvice", Shape::Boolean),
    required!("universignTransactions", Shape::Array(&Shape::Unknown)),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
    required!("initialInvestmentFirst", Shape::Number),
    required!("initialInvestmentMonthly", Shape::Number),
]);

pub const USER_KYCS_OUTPUT: Shape = collection_shape!(USER_KYC);

pub const KYC_QUESTION: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("answers", Shape::Array(&Shape::Unknown)),
    required!("category", Shape::String),
    required!("createdAt", Shape::String),
    optional!("currentStepToPatch", Shape::Unknown),
    required!("id", Shape::String),
    required!("identifier", Shape::String),
    required!("isSubQuestion", Shape::Boolean),
    required!("name", Shape::String),
    optional!("nextQuestion", Shape::Unknown),
    optional!("options", Shape::Unknown),
    optional!("parentAnswer", Shape::Unknown),
    required!("position", Shape::String),
    required!("postAnswer", Shape::Boolean),
    optional!("previousQuestion", Shape::Unknown),
    required!("seconds", Shape::String),
    required!("slug", Shape::String),
    required!("type", Shape::String),
    required!("updatedAt", Shape::String),
    required!("uuid", Shape::String),
]);

pub const KYC_QUESTIONS_OUTPUT: Shape = collection_shape!(KYC_QUESTION);

pub const KYC_CATEGORY: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("createdAt", Shape::String),
    required!("id", Shape::String),
    required!("position", Shape::String),
    required!("name", Shape::String),
    required!("slug", Shape::String),
    required!("updatedAt", Shape::String),
    required!("uuid", Shape::String),
]);

pub const KYC_CATEGORIES_OUTPUT: Shape = collection_shape!(KYC_CATEGORY);

pub const AVAILABLE_PRODUCT: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("position", Shape::Nullable(&Shape::String)),
    required!("estimatedPerformance", Shape::Number),
    required!("providerFeeRate", Shape::Nullable(&Shape::Number)),
    required!("providerFeeRetrocommissionRate", Shape::Nullable(&Shape::Number)),
    required!("name", Shape::String),
    required!("slug", Shape::String),
    required!("isin", Shape::String),
    required!("versiondate", Shape::Nullable(&Shape::String)),
    required!("risk", Shape::String),
    required!("annualPerformance", Shape::Number),
    required!("impactReport", Shape::Nullable(&Shape::String)),
    required!("productProvider", Shape::String),
    required!("dici", Shape::Nullable(&Shape::String)),
    required!(
        "details",
        Shape::Object(&[
            required!(
                "cumulated_performance",
                Shape::Nullable(&Shape::Record(&Shape::Number))
            ),
            required!("annualized_performance", Shape::Record(&Shape::Number)),
        ])
    ),
    required!("investmentAccountProvider", Shape::Array(&Shape::String)),
    required!("language", Shape::Array(&Shape::Unknown)),
    optional!("description", Shape::Unknown),
    optional!("trendDescription", Shape::Unknown),
    optional!("dashboardDescription", Shape::Unknown),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
    required!("investProfiles", Shape::Array(&Shape::String)),
]);

pub const AVAILABLE_PRODUCTS_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("hydra:member", Shape::Array(&AVAILABLE_PRODUCT)),
    required!("hydra:totalItems", Shape::Integer),
    optional!("hydra:view", hydra::VIEW),
    required!("hydra:search", hydra::SEARCH_NULLABLE_PROPERTY),
]);

pub const ANALYSIS_FUND: Shape = Shape::Object(&[
    required!("amount", Shape::Number),
    required!("dici", Shape::String),
    required!("isin", Shape::String),
    required!("name", Shape::String),
    required!("percent", Shape::Number),
    required!("slug", Shape::String),
    required!("type", Shape::String),
]);

pub const CONSULTING_ANALYSIS_OUTPUT: Shape = Shape::Array(&Shape::Object(&[
    required!("amount", Shape::Number),
    required!("funds", Shape::Array(&ANALYSIS_FUND)),
    required!("name", Shape::String),
    required!("percent", Shape::Number),
    required!("slug", Shape::String),
    required!("type", Shape::String),
]));

pub const USER_KYCS: EndpointDescriptor = EndpointDescriptor {
    name: "user_kycs",
    method: HttpMethod::Get,
    path: "v1/users/{userId}/user_kycs",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_USER_ID,
    output: &USER_KYCS_OUTPUT,
};

pub const KYC_QUESTIONS: EndpointDescriptor = EndpointDescriptor {
    name: "kyc_questions",
    method: HttpMethod::Get,
    path: "v1/investment_account_providers/{provider}/kyc_questions",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_PROVIDER,
    output: &KYC_QUESTIONS_OUTPUT,
};

pub const KYC_CATEGORIES: EndpointDescriptor = EndpointDescriptor {
    name: "kyc_categories",
    method: HttpMethod::Get,
    path: "v1/kyc_categories",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_ONLY,
    output: &KYC_CATEGORIES_OUTPUT,
};

pub const AVAILABLE_PRODUCTS: EndpointDescriptor = EndpointDescriptor {
    name: "available_products",
    method: HttpMethod::Get,
    path: "v1/user_kycs/{userKycsId}/available_products",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_KYC_ID,
    output: &AVAILABLE_PRODUCTS_OUTPUT,
};

pub const INITIAL_CONSULTING_ANALYSIS: EndpointDescriptor = EndpointDescriptor {
    name: "initial_consulting_analysis",
    method: HttpMethod::Get,
    path: "v1/user_kycs/{userKycsId}/consulting_analysis/initial",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_KYC_ID,
    output: &CONSULTING_ANALYSIS_OUTPUT,
};

pub const MONTHLY_CONSULTING_ANALYSIS: EndpointDescriptor = EndpointDescriptor {
    name: "monthly_consulting_analysis",
    method: HttpMethod::Get,
    path: "v1/user_kycs/{userKycsId}/consulting_analysis/monthly",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_KYC_ID,
    output: &CONSULTING_ANALYSIS_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserKyc {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub current_step: String,
    pub last_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<KycAdvice>,
    pub investment_account: String,
    pub user: String,
    pub user_kyc_answers: Vec<KycAnswer>,
    pub fast_advice: bool,
    pub universign_transactions: Vec<Value>,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
    pub initial_investment_first: f64,
    pub initial_investment_monthly: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycAdvice {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub video: String,
    pub inconsistent: bool,
    pub suggested_investment_account_provider: String,
    pub format: String,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycAnswer {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub valid: bool,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

pub type UserKycs = HydraCollection<UserKyc>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycQuestion {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub answers: Vec<Value>,
    pub category: String,
    pub created_at: String,
    #[serde(default)]
    pub current_step_to_patch: Value,
    pub id: String,
    pub identifier: String,
    pub is_sub_question: bool,
    pub name: String,
    #[serde(default)]
    pub next_question: Value,
    #[serde(default)]
    pub options: Value,
    #[serde(default)]
    pub parent_answer: Value,
    pub position: String,
    pub post_answer: bool,
    #[serde(default)]
    pub previous_question: Value,
    pub seconds: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: String,
    pub uuid: String,
}

pub type KycQuestions = HydraCollection<KycQuestion>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycCategory {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub created_at: String,
    pub id: String,
    pub position: String,
    pub name: String,
    pub slug: String,
    pub updated_at: String,
    pub uuid: String,
}

pub type KycCategories = HydraCollection<KycCategory>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableProducts {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    #[serde(rename = "hydra:member")]
    pub members: Vec<AvailableProduct>,
    #[serde(rename = "hydra:totalItems")]
    pub total_items: i64,
    #[serde(
        rename = "hydra:view",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub view: Option<HydraView>,
    #[serde(rename = "hydra:search")]
    pub search: HydraSearch,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableProduct {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub position: Option<String>,
    pub estimated_performance: f64,
    pub provider_fee_rate: Option<f64>,
    pub provider_fee_retrocommission_rate: Option<f64>,
    pub name: String,
    pub slug: String,
    pub isin: String,
    #[serde(rename = "versiondate")]
    pub version_date: Option<String>,
    pub risk: String,
    pub annual_performance: f64,
    pub impact_report: Option<String>,
    pub product_provider: String,
    pub dici: Option<String>,
    pub details: PerformanceDetails,
    pub investment_account_provider: Vec<String>,
    pub language: Vec<Value>,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub trend_description: Value,
    #[serde(default)]
    pub dashboard_description: Value,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
    pub invest_profiles: Vec<String>,
}

/// Performance per period label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceDetails {
    pub cumulated_performance: Option<BTreeMap<String, f64>>,
    pub annualized_performance: BTreeMap<String, f64>,
}

/// One asset class of a consulting analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisAllocation {
    pub amount: f64,
    pub funds: Vec<AnalysisFund>,
    pub name: String,
    pub percent: f64,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFund {
    pub amount: f64,
    pub dici: String,
    pub isin: String,
    pub name: String,
    pub percent: f64,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}

pub type ConsultingAnalysis = Vec<AnalysisAllocation>;

pub struct GetUserKycs;

impl Endpoint for GetUserKycs {
    type Output = UserKycs;
    const DESCRIPTOR: &'static EndpointDescriptor = &USER_KYCS;
}

pub struct GetKycQuestions;

impl Endpoint for GetKycQuestions {
    type Output = KycQuestions;
    const DESCRIPTOR: &'static EndpointDescriptor = &KYC_QUESTIONS;
}

pub struct GetKycCategories;

impl Endpoint for GetKycCategories {
    type Output = KycCategories;
    const DESCRIPTOR: &'static EndpointDescriptor = &KYC_CATEGORIES;
}

pub struct GetAvailableProducts;

impl Endpoint for GetAvailableProducts {
    type Output = AvailableProducts;
    const DESCRIPTOR: &'static EndpointDescriptor = &AVAILABLE_PRODUCTS;
}

pub struct GetInitialConsultingAnalysis;

impl Endpoint for GetInitialConsultingAnalysis {
    type Output = ConsultingAnalysis;
    const DESCRIPTOR: &'static EndpointDescriptor = &INITIAL_CONSULTING_ANALYSIS;
}

pub struct GetMonthlyConsultingAnalysis;

impl Endpoint for GetMonthlyConsultingAnalysis {
    type Output = ConsultingAnalysis;
    const DESCRIPTOR: &'static EndpointDescriptor = &MONTHLY_CONSULTING_ANALYSIS;
}
