//! Full investment account record, as returned by the account-management
//! views, with or without its JSON-LD identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shape::Shape;
use crate::{optional, required};

macro_rules! provider_shape {
    ($($view:expr,)*) => {
        Shape::Object(&[
            $($view,)*
            required!("id", Shape::String),
            required!("name", Shape::String),
            required!("slug", Shape::String),
            required!("position", Shape::String),
            required!("enabled", Shape::Boolean),
            optional!("publicationMode", Shape::Unknown),
            optional!("publishOn", Shape::Unknown),
            optional!("unpublishOn", Shape::Unknown),
            required!("minimumFirstInvestment", Shape::String),
            required!("minimumFirstInvestmentMonthly", Shape::String),
            required!("minimumInvestmentMonthly", Shape::String),
            required!("walletProvider", Shape::Array(&Shape::Unknown)),
            required!("uuid", Shape::String),
            required!("createdAt", Shape::String),
            required!("updatedAt", Shape::String),
        ])
    };
}

macro_rules! account_shape {
    ($provider:expr, $($view:expr,)*) => {
        Shape::Object(&[
            $($view,)*
            required!("id", Shape::String),
            required!("status", Shape::String),
            required!("reference", Shape::String),
            required!("watermark", Shape::Integer),
            required!("watermarkedAt", Shape::String),
            optional!("error", Shape::Unknown),
            optional!("refusedSource", Shape::Unknown),
            required!("providerProjectId", Shape::String),
            required!("providerContractId", Shape::String),
            required!("statusProvider", Shape::String),
            required!("profile", Shape::String),
            required!("incompatible", Shape::Boolean),
            required!("effectiveDate", Shape::String),
            required!("nextMonthlyPaymentDate", Shape::String),
            required!("lastProviderKycUpdateAt", Shape::String),
            required!("provider", $provider),
            required!("uuid", Shape::String),
            required!("createdAt", Shape::String),
            required!("updatedAt", Shape::String),
        ])
    };
}

pub const PROVIDER: Shape = provider_shape!();

pub const PROVIDER_WITH_VIEW: Shape = provider_shape!(
    required!("@id", Shape::String),
    required!("@type", Shape::String),
);

pub const INVESTMENT_ACCOUNT: Shape = account_shape!(PROVIDER,);

/// The account and its provider both carry `@id`/`@type`.
pub const INVESTMENT_ACCOUNT_WITH_VIEW: Shape = account_shape!(
    PROVIDER_WITH_VIEW,
    required!("@id", Shape::String),
    required!("@type", Shape::String),
);

/// Fits both [`INVESTMENT_ACCOUNT`] and [`INVESTMENT_ACCOUNT_WITH_VIEW`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentAccount {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub id: String,
    pub status: String,
    pub reference: String,
    pub watermark: i64,
    pub watermarked_at: String,
    #[serde(default)]
    pub error: Value,
    #[serde(default)]
    pub refused_source: Value,
    pub provider_project_id: String,
    pub provider_contract_id: String,
    pub status_provider: String,
    pub profile: String,
    pub incompatible: bool,
    pub effective_date: String,
    pub next_monthly_payment_date: String,
    pub last_provider_kyc_update_at: String,
    pub provider: Provider,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Insurer running the account. Amounts are decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub id: String,
    pub name: String,
    pub slug: String,
    pub position: String,
    pub enabled: bool,
    #[serde(default)]
    pub publication_mode: Value,
    #[serde(default)]
    pub publish_on: Value,
    #[serde(default)]
    pub unpublish_on: Value,
    pub minimum_first_investment: String,
    pub minimum_first_investment_monthly: String,
    pub minimum_investment_monthly: String,
    pub wallet_provider: Vec<Value>,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaRegistry;
    use serde_json::json;

    static PLAIN: Shape = INVESTMENT_ACCOUNT;
    static WITH_VIEW: Shape = INVESTMENT_ACCOUNT_WITH_VIEW;

    fn account() -> Value {
        json!({
            "id": "4312",
            "status": "active",
            "reference": "77120",
            "watermark": 3,
            "watermarkedAt": "2022-11-02T09:14:00+01:00",
            "error": null,
            "refusedSource": null,
            "providerProjectId": "880",
            "providerContractId": "991",
            "statusProvider": "Contrat ouvert",
            "profile": "co-pilot",
            "incompatible": false,
            "effectiveDate": "2021-05-03T00:00:00+02:00",
            "nextMonthlyPaymentDate": "2022-12-05T00:00:00+01:00",
            "lastProviderKycUpdateAt": "2022-10-01T10:00:00+02:00",
            "provider": {
                "id": "1",
                "name": "Apicil",
                "slug": "apicil",
                "position": "1",
                "enabled": true,
                "publicationMode": null,
                "publishOn": null,
                "unpublishOn": null,
                "minimumFirstInvestment": "300",
                "minimumFirstInvestmentMonthly": "50",
                "minimumInvestmentMonthly": "50",
                "walletProvider": [],
                "uuid": "5b8f1c1e-6d2f-4d3a-9a55-0f2d9e1f7a01",
                "createdAt": "2020-01-01T00:00:00+01:00",
                "updatedAt": "2022-01-01T00:00:00+01:00"
            },
            "uuid": "c0a8e3f4-2b1d-4e6f-8a9b-1c2d3e4f5a6b",
            "createdAt": "2021-04-28T18:00:00+02:00",
            "updatedAt": "2022-11-02T09:14:00+01:00"
        })
    }

    fn with_view() -> Value {
        let mut body = account();
        body["@id"] = json!("/v1/user_investment_accounts/4312");
        body["@type"] = json!("UserInvestmentAccounts");
        body["provider"]["@id"] = json!("/v1/investment_account_providers/apicil");
        body["provider"]["@type"] = json!("InvestmentAccountProviders");
        body
    }

    #[test]
    fn plain_record_round_trips() {
        let registry = SchemaRegistry::new();
        let typed: InvestmentAccount = registry.validate_as("account", &PLAIN, &account()).unwrap();
        assert!(typed.iri.is_none());
        assert_eq!(serde_json::to_value(&typed).unwrap(), account());
    }

    #[test]
    fn view_record_round_trips() {
        let registry = SchemaRegistry::new();
        let typed: InvestmentAccount = registry
            .validate_as("account", &WITH_VIEW, &with_view())
            .unwrap();
        assert_eq!(typed.provider.iri.as_deref(), Some("/v1/investment_account_providers/apicil"));
        assert_eq!(serde_json::to_value(&typed).unwrap(), with_view());
    }

    #[test]
    fn view_shape_requires_identifiers_on_provider_too() {
        let registry = SchemaRegistry::new();
        let mut body = with_view();
        body["provider"].as_object_mut().unwrap().remove("@type");
        let violations = registry.check("account", &WITH_VIEW, &body).unwrap();
        assert_eq!(violations.paths(), vec!["provider.@type"]);
    }

    #[test]
    fn plain_shape_drops_identifiers() {
        let registry = SchemaRegistry::new();
        let projected = registry.validate("account", &PLAIN, &with_view()).unwrap();
        assert_eq!(projected, account());
    }
}
