//! A user investment account and what hangs off it: capital, valuations,
//! held products, and the insurer that runs it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::hydra::{self, collection_shape, HydraCollection, HydraSearch, HydraView};
use crate::shape::Shape;
use crate::v1::{TOKEN_AND_ACCOUNT_ID, TOKEN_AND_ACCOUNT_REF, TOKEN_AND_PROVIDER};
use crate::{optional, required};

pub const FINANCIAL_CAPITAL_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("amount", Shape::Number),
    required!("performance", Shape::Number),
    required!("numberPendingOperations", Shape::Integer),
    required!("buyAmount", Shape::Number),
    required!("sellAmount", Shape::Number),
    required!("exchangeAmount", Shape::Number),
    required!("effectiveDate", Shape::String),
    required!("totalInvestAmount", Shape::Number),
    required!("initialInvestmentPending", Shape::Boolean),
    optional!("operationValuatedAt", Shape::Unknown),
    required!("isBeingDailyProcessed", Shape::Boolean),
]);

pub const INVESTMENT_VALUE: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("type", Shape::String),
    required!("date", Shape::String),
    required!("amount", Shape::Number),
    required!("unrealisedAmount", Shape::Nullable(&Shape::Number)),
    optional!("averageAcquisitionAmount", Shape::Unknown),
    optional!("securityUnits", Shape::Unknown),
    required!("performance", Shape::Nullable(&Shape::Number)),
    required!("investedAmount", Shape::Nullable(&Shape::Number)),
    optional!("product", Shape::Unknown),
    required!("userInvestmentAccount", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
    required!("owner", Shape::String),
]);

pub const INVESTMENT_VALUES_OUTPUT: Shape = collection_shape!(INVESTMENT_VALUE);

pub const ACCOUNT_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("advice", Shape::Array(&Shape::String)),
    required!("appointmentRequired", Shape::Boolean),
    required!("createdAt", Shape::String),
    required!("duration", Shape::Integer),
    required!("hidden", Shape::Boolean),
    required!("id", Shape::String),
    required!("incompatible", Shape::Boolean),
    required!("provider", Shape::String),
    required!("status", Shape::String),
    required!("updatedAt", Shape::String),
    required!("user", Shape::String),
    required!("userInvestmentAccountCallBack", Shape::Array(&Shape::String)),
    required!("userKyc", Shape::String),
    required!("userKycs", Shape::Array(&Shape::String)),
    required!("uuid", Shape::String),
    required!("watermark", Shape::Integer),
]);

pub const ACCOUNT_PRODUCT: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("productId", Shape::Integer),
    required!("name", Shape::String),
    required!("investProfileCategories", Shape::Array(&Shape::String)),
    required!("amount", Shape::Number),
    required!("pendingTransaction", Shape::Boolean),
    required!("performance", Shape::Number),
    required!("securityUnits", Shape::Number),
    required!("averageAcquisitionAmount", Shape::Number),
]);

/// No `hydra:totalItems` on this collection.
pub const ACCOUNT_PRODUCTS_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("hydra:member", Shape::Array(&ACCOUNT_PRODUCT)),
    optional!("hydra:view", hydra::VIEW),
    required!("hydra:search", hydra::SEARCH),
]);

pub const PROVIDER_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("name", Shape::String),
    required!("slug", Shape::String),
]);

pub const ACCOUNT: EndpointDescriptor = EndpointDescriptor {
    name: "user_investment_account",
    method: HttpMethod::Get,
    path: "v1/user_investment_accounts/{userInvestmentAccountId}",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_ACCOUNT_REF,
    output: &ACCOUNT_OUTPUT,
};

pub const FINANCIAL_CAPITAL: EndpointDescriptor = EndpointDescriptor {
    name: "user_financial_capital",
    method: HttpMethod::Get,
    path: "v1/user_investment_accounts/{userInvestmentAccountId}/user_financial_capital",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_ACCOUNT_ID,
    output: &FINANCIAL_CAPITAL_OUTPUT,
};

pub const INVESTMENT_VALUES: EndpointDescriptor = EndpointDescriptor {
    name: "user_investment_values",
    method: HttpMethod::Get,
    path: "v1/user_investment_accounts/{userInvestmentAccountId}/user_investment_values",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_ACCOUNT_ID,
    output: &INVESTMENT_VALUES_OUTPUT,
};

pub const ACCOUNT_PRODUCTS: EndpointDescriptor = EndpointDescriptor {
    name: "user_investment_account_products",
    method: HttpMethod::Get,
    path: "v1/user_investment_accounts/{userInvestmentAccountId}/user_investment_account_products",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_ACCOUNT_ID,
    output: &ACCOUNT_PRODUCTS_OUTPUT,
};

pub const PROVIDER: EndpointDescriptor = EndpointDescriptor {
    name: "investment_account_provider",
    method: HttpMethod::Get,
    path: "v1/investment_account_providers/{provider}",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_PROVIDER,
    output: &PROVIDER_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialCapital {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub amount: f64,
    pub performance: f64,
    pub number_pending_operations: i64,
    pub buy_amount: f64,
    pub sell_amount: f64,
    pub exchange_amount: f64,
    pub effective_date: String,
    pub total_invest_amount: f64,
    pub initial_investment_pending: bool,
    #[serde(default)]
    pub operation_valuated_at: Value,
    pub is_being_daily_processed: bool,
}

/// A dated valuation of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentValue {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub amount: f64,
    pub unrealised_amount: Option<f64>,
    #[serde(default)]
    pub average_acquisition_amount: Value,
    #[serde(default)]
    pub security_units: Value,
    pub performance: Option<f64>,
    pub invested_amount: Option<f64>,
    #[serde(default)]
    pub product: Value,
    pub user_investment_account: String,
    pub created_at: String,
    pub updated_at: String,
    pub owner: String,
}

pub type InvestmentValues = HydraCollection<InvestmentValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInvestmentAccount {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub advice: Vec<String>,
    pub appointment_required: bool,
    pub created_at: String,
    pub duration: i64,
    pub hidden: bool,
    pub id: String,
    pub incompatible: bool,
    pub provider: String,
    pub status: String,
    pub updated_at: String,
    pub user: String,
    pub user_investment_account_call_back: Vec<String>,
    pub user_kyc: String,
    pub user_kycs: Vec<String>,
    pub uuid: String,
    pub watermark: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProducts {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    #[serde(rename = "hydra:member")]
    pub members: Vec<AccountProduct>,
    #[serde(
        rename = "hydra:view",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub view: Option<HydraView>,
    #[serde(rename = "hydra:search")]
    pub search: HydraSearch,
}

/// A product position held in the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProduct {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub product_id: i64,
    pub name: String,
    pub invest_profile_categories: Vec<String>,
    pub amount: f64,
    pub pending_transaction: bool,
    pub performance: f64,
    pub security_units: f64,
    pub average_acquisition_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAccountProvider {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub name: String,
    pub slug: String,
}

pub struct GetUserInvestmentAccount;

impl Endpoint for GetUserInvestmentAccount {
    type Output = UserInvestmentAccount;
    const DESCRIPTOR: &'static EndpointDescriptor = &ACCOUNT;
}

pub struct GetFinancialCapital;

impl Endpoint for GetFinancialCapital {
    type Output = FinancialCapital;
    const DESCRIPTOR: &'static EndpointDescriptor = &FINANCIAL_CAPITAL;
}

pub struct GetInvestmentValues;

impl Endpoint for GetInvestmentValues {
    type Output = InvestmentValues;
    const DESCRIPTOR: &'static EndpointDescriptor = &INVESTMENT_VALUES;
}

pub struct GetAccountProducts;

impl Endpoint for GetAccountProducts {
    type Output = AccountProducts;
    const DESCRIPTOR: &'static EndpointDescriptor = &ACCOUNT_PRODUCTS;
}

pub struct GetInvestmentAccountProvider;

impl Endpoint for GetInvestmentAccountProvider {
    type Output = InvestmentAccountProvider;
    const DESCRIPTOR: &'static EndpointDescriptor = &PROVIDER;
}
