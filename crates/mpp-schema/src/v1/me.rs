//! `v1/me`: the authenticated user's profile.

use serde::{Deserialize, Serialize};

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::shape::Shape;
use crate::v1::TOKEN_ONLY;
use crate::{optional, required};

pub const AFFILIATE_PROVIDER: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("name", Shape::String),
    required!("slug", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const ACCOUNT_PROVIDER: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("name", Shape::String),
    required!("slug", Shape::String),
    required!("position", Shape::String),
    required!("enabled", Shape::Boolean),
    required!("minimumFirstInvestment", Shape::Number),
    required!("minimumFirstInvestmentMonthly", Shape::Number),
    required!("minimumInvestmentMonthly", Shape::Number),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const INVESTMENT_ACCOUNT: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("status", Shape::String),
    required!("appointmentRequired", Shape::Boolean),
    optional!("reference", Shape::String),
    required!("watermark", Shape::Integer),
    optional!("watermarkedAt", Shape::String),
    optional!("providerProjectId", Shape::String),
    optional!("providerContractId", Shape::String),
    optional!("statusProvider", Shape::String),
    optional!("profile", Shape::String),
    required!("incompatible", Shape::Boolean),
    optional!("effectiveDate", Shape::String),
    optional!("nextMonthlyPaymentDate", Shape::String),
    optional!("lastProviderKycUpdateAt", Shape::String),
    // Older accounts still carry a list of providers.
    required!(
        "provider",
        Shape::Union(&[Shape::Array(&ACCOUNT_PROVIDER), ACCOUNT_PROVIDER])
    ),
    required!("hidden", Shape::Boolean),
    required!("duration", Shape::Integer),
    required!("userKyc", Shape::String),
    required!("userKycs", Shape::Array(&Shape::String)),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const SENSIBLE_DATA: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("iban", Shape::String),
    required!("swift", Shape::String),
    required!("uuid", Shape::String),
]);

pub const REGISTRATION_REASON: Shape = Shape::Object(&[
    required!("@type", Shape::String),
    required!("@id", Shape::String),
    required!("message", Shape::String),
    required!("persona", Shape::String),
    required!("id", Shape::String),
]);

pub const ME_OUTPUT: Shape = Shape::Object(&[
    required!("@context", Shape::String),
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("username", Shape::String),
    required!("email", Shape::String),
    required!("isTest", Shape::Boolean),
    required!("lastLogin", Shape::String),
    required!("roles", Shape::Array(&Shape::String)),
    required!("firstname", Shape::String),
    required!("lastname", Shape::String),
    required!("gender", Shape::String),
    required!("phone", Shape::String),
    required!("cgvAccepted", Shape::Boolean),
    required!("validatedAt", Shape::String),
    required!("birthdate", Shape::String),
    required!("nationality", Shape::String),
    optional!("affiliateProvider", AFFILIATE_PROVIDER),
    optional!("origin", Shape::String),
    required!("viewPreference", Shape::String),
    optional!("investmentAccounts", Shape::Array(&INVESTMENT_ACCOUNT)),
    required!("userSensibleData", Shape::Array(&SENSIBLE_DATA)),
    required!("registrationReason", REGISTRATION_REASON),
    required!("registrationReasonDetail", Shape::String),
    optional!("universignCertifiedAt", Shape::String),
    required!("crispId", Shape::String),
    required!("crispSegments", Shape::Array(&Shape::String)),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
    required!("affiliationLevel", Shape::String),
    required!("affiliationAlreadyClientUserCount", Shape::Integer),
    required!("affiliationTotalUserCount", Shape::Integer),
    required!("affiliationSavingsPercent", Shape::Number),
    required!("affiliationSavingPercentWithoutGodChilds", Shape::Number),
]);

pub const ME: EndpointDescriptor = EndpointDescriptor {
    name: "me",
    method: HttpMethod::Get,
    path: "v1/me",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_ONLY,
    output: &ME_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_test: bool,
    pub last_login: String,
    pub roles: Vec<String>,
    pub firstname: String,
    pub lastname: String,
    pub gender: String,
    pub phone: String,
    pub cgv_accepted: bool,
    pub validated_at: String,
    pub birthdate: String,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_provider: Option<AffiliateProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub view_preference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_accounts: Option<Vec<ProfileInvestmentAccount>>,
    pub user_sensible_data: Vec<SensibleData>,
    pub registration_reason: RegistrationReason,
    pub registration_reason_detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universign_certified_at: Option<String>,
    pub crisp_id: String,
    pub crisp_segments: Vec<String>,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
    pub affiliation_level: String,
    pub affiliation_already_client_user_count: i64,
    pub affiliation_total_user_count: i64,
    pub affiliation_savings_percent: f64,
    pub affiliation_saving_percent_without_god_childs: f64,
}

impl Me {
    /// Investment accounts, empty when the profile has none.
    pub fn accounts(&self) -> &[ProfileInvestmentAccount] {
        self.investment_accounts.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateProvider {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An investment account as embedded in the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInvestmentAccount {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub status: String,
    pub appointment_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub watermark: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermarked_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_contract_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    pub incompatible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_monthly_payment_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_provider_kyc_update_at: Option<String>,
    pub provider: ProviderRef,
    pub hidden: bool,
    pub duration: i64,
    pub user_kyc: String,
    pub user_kycs: Vec<String>,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ProfileInvestmentAccount {
    /// Whether the account has left the `pending` state.
    pub fn is_active(&self) -> bool {
        self.status != "pending"
    }
}

/// The account's provider, or the legacy list of providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderRef {
    Many(Vec<AccountProvider>),
    One(AccountProvider),
}

impl ProviderRef {
    /// The providers, whichever form the backend used.
    pub fn as_slice(&self) -> &[AccountProvider] {
        match self {
            ProviderRef::Many(providers) => providers,
            ProviderRef::One(provider) => std::slice::from_ref(provider),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProvider {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub position: String,
    pub enabled: bool,
    pub minimum_first_investment: f64,
    pub minimum_first_investment_monthly: f64,
    pub minimum_investment_monthly: f64,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensibleData {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub iban: String,
    pub swift: String,
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationReason {
    #[serde(rename = "@type")]
    pub resource_type: String,
    #[serde(rename = "@id")]
    pub iri: String,
    pub message: String,
    pub persona: String,
    pub id: String,
}

pub struct GetMe;

impl Endpoint for GetMe {
    type Output = Me;
    const DESCRIPTOR: &'static EndpointDescriptor = &ME;
}
