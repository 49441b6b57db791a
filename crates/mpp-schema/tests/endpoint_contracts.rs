//! # Endpoint contract tests
//!
//! Keeps every endpoint's shape and its Rust output type in lock-step. Each
//! endpoint has a fully populated response body in `tests/fixtures/`; the
//! body must validate, decode, and re-encode to an equal JSON value. Bodies
//! with a field removed or mistyped must be rejected with that field's path.

use std::collections::HashSet;
use std::path::PathBuf;

use mpp_schema::auth::Login;
use mpp_schema::public::GetInvestProfileHistory;
use mpp_schema::registry::{self, ENDPOINTS};
use mpp_schema::v1::accounts::{
    GetAccountProducts, GetFinancialCapital, GetInvestmentAccountProvider, GetInvestmentValues,
    GetUserInvestmentAccount,
};
use mpp_schema::v1::advice::{GetAdvice, GetAdviceDto};
use mpp_schema::v1::coupons::{GetCoupons, GetUserCoupons};
use mpp_schema::v1::invest_profiles::{GetInvestProfileCategories, GetInvestProfiles};
use mpp_schema::v1::kyc::{
    GetAvailableProducts, GetInitialConsultingAnalysis, GetKycCategories, GetKycQuestions,
    GetMonthlyConsultingAnalysis, GetUserKycs,
};
use mpp_schema::v1::me::{GetMe, ProviderRef};
use mpp_schema::v1::settings::{GetAdviceWaitingVideo, GetTwitch};
use mpp_schema::{
    Endpoint, EndpointDescriptor, SchemaRegistry, SchemaValidationError, Shape, ViolationKind,
};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Load a response fixture from tests/fixtures/.
fn fixture(name: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(format!("{name}.json"));
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}

/// Validate, decode, re-encode; returns the endpoint name.
fn round_trip<E: Endpoint>(registry: &SchemaRegistry) -> &'static str {
    let descriptor = E::DESCRIPTOR;
    let body = fixture(descriptor.name);

    let projected = registry
        .validate(descriptor.name, descriptor.output, &body)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(projected, body, "{}: projection lost fields", descriptor.name);

    let typed: E::Output = registry
        .validate_as(descriptor.name, descriptor.output, &body)
        .unwrap_or_else(|e| panic!("{e}"));
    let encoded = serde_json::to_value(&typed).unwrap();
    assert_eq!(encoded, body, "{}: typed round trip differs", descriptor.name);

    descriptor.name
}

/// The object whose required fields are probed, and the pointer to it.
fn probe_target(descriptor: &EndpointDescriptor) -> (&'static Shape, &'static str) {
    match *descriptor.output {
        Shape::Array(item) => (item, "/0"),
        _ => (descriptor.output, ""),
    }
}

fn required_fields(shape: &'static Shape) -> Vec<&'static mpp_schema::Field> {
    shape
        .fields()
        .unwrap_or_default()
        .iter()
        .filter(|f| f.required)
        .collect()
}

fn rendered(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("[0].{key}")
    }
}

#[test]
fn every_endpoint_round_trips_through_its_type() {
    let registry = SchemaRegistry::with_endpoints(ENDPOINTS).unwrap();
    let covered: HashSet<&str> = [
        round_trip::<Login>(&registry),
        round_trip::<GetMe>(&registry),
        round_trip::<GetTwitch>(&registry),
        round_trip::<GetAdviceWaitingVideo>(&registry),
        round_trip::<GetUserKycs>(&registry),
        round_trip::<GetUserCoupons>(&registry),
        round_trip::<GetCoupons>(&registry),
        round_trip::<GetAdvice>(&registry),
        round_trip::<GetAdviceDto>(&registry),
        round_trip::<GetInvestProfileCategories>(&registry),
        round_trip::<GetInvestProfiles>(&registry),
        round_trip::<GetUserInvestmentAccount>(&registry),
        round_trip::<GetFinancialCapital>(&registry),
        round_trip::<GetInvestmentValues>(&registry),
        round_trip::<GetAccountProducts>(&registry),
        round_trip::<GetInvestmentAccountProvider>(&registry),
        round_trip::<GetKycCategories>(&registry),
        round_trip::<GetKycQuestions>(&registry),
        round_trip::<GetAvailableProducts>(&registry),
        round_trip::<GetInitialConsultingAnalysis>(&registry),
        round_trip::<GetMonthlyConsultingAnalysis>(&registry),
        round_trip::<GetInvestProfileHistory>(&registry),
    ]
    .into_iter()
    .collect();

    let registered: HashSet<&str> = ENDPOINTS.iter().map(|e| e.name).collect();
    assert_eq!(covered, registered);
}

#[test]
fn every_endpoint_reports_a_missing_required_field_by_path() {
    let registry = SchemaRegistry::new();
    for descriptor in ENDPOINTS {
        let (target, prefix) = probe_target(descriptor);
        let field = required_fields(target)[0];

        let mut body = fixture(descriptor.name);
        body.pointer_mut(prefix)
            .and_then(Value::as_object_mut)
            .unwrap()
            .remove(field.name);

        let err = registry
            .validate(descriptor.name, descriptor.output, &body)
            .unwrap_err();
        let SchemaValidationError::ValidationFailed { violations, .. } = err else {
            panic!("{}: expected ValidationFailed", descriptor.name);
        };
        let path = rendered(prefix, field.name);
        let violation = violations
            .at(&path)
            .unwrap_or_else(|| panic!("{}: no violation at {path}: {violations}", descriptor.name));
        assert!(
            matches!(violation.kind, ViolationKind::Missing { .. }),
            "{}: {violation}",
            descriptor.name
        );
    }
}

#[test]
fn every_endpoint_reports_a_wrong_typed_field_by_path() {
    let registry = SchemaRegistry::new();
    for descriptor in ENDPOINTS {
        let (target, prefix) = probe_target(descriptor);
        let field = required_fields(target)
            .into_iter()
            .find(|f| f.shape != Shape::Unknown)
            .unwrap();
        let wrong = match field.shape {
            Shape::String | Shape::Nullable(&Shape::String) => json!(42),
            _ => json!("wrong"),
        };

        let mut body = fixture(descriptor.name);
        body.pointer_mut(prefix)
            .and_then(Value::as_object_mut)
            .unwrap()
            .insert(field.name.to_string(), wrong);

        let violations = registry
            .check(descriptor.name, descriptor.output, &body)
            .unwrap();
        let path = rendered(prefix, field.name);
        assert!(
            violations.mentions(&path),
            "{}: no violation at {path}: {violations}",
            descriptor.name
        );
    }
}

#[test]
fn path_parameters_are_required_input_fields() {
    for descriptor in ENDPOINTS {
        for param in descriptor.path_parameters() {
            let field = descriptor
                .input
                .field(param)
                .unwrap_or_else(|| panic!("{}: no input field '{param}'", descriptor.name));
            assert!(field.required, "{}: '{param}' is optional", descriptor.name);
            assert!(
                matches!(field.shape, Shape::String | Shape::Integer),
                "{}: '{param}' cannot be a path segment",
                descriptor.name
            );
        }
    }
}

#[test]
fn token_is_an_input_exactly_when_authenticated() {
    for descriptor in ENDPOINTS {
        let token = descriptor.input.field("token");
        assert_eq!(
            token.is_some_and(|f| f.required && f.shape == Shape::String),
            descriptor.authenticated,
            "{}",
            descriptor.name
        );
    }
}

#[test]
fn inputs_declare_nothing_but_parameters_and_token() {
    for descriptor in ENDPOINTS.iter().filter(|e| e.name != "login") {
        let params = descriptor.path_parameters();
        for field in descriptor.input.fields().unwrap() {
            assert!(
                field.name == "token" || params.contains(&field.name),
                "{}: stray input field '{}'",
                descriptor.name,
                field.name
            );
        }
    }
}

#[test]
fn deep_violation_names_full_path() {
    let registry = SchemaRegistry::new();
    let mut body = fixture("me");
    let accounts = body["investmentAccounts"].as_array_mut().unwrap();
    let mut third = accounts[0].clone();
    third["provider"]["id"] = json!(3);
    accounts.push(third);

    let descriptor = registry::find("me").unwrap();
    let violations = registry
        .check(descriptor.name, descriptor.output, &body)
        .unwrap();
    assert_eq!(violations.len(), 1);
    assert!(violations.mentions("investmentAccounts[2].provider.id"));

    let ViolationKind::NoMatchingBranch { branches } =
        &violations.at("investmentAccounts[2].provider").unwrap().kind
    else {
        panic!("expected NoMatchingBranch: {violations}");
    };
    assert_eq!(branches.len(), 2);
    assert_eq!(
        branches[1].violations[0].kind,
        ViolationKind::TypeMismatch {
            expected: "string".into(),
            found: "number"
        }
    );
}

#[test]
fn provider_accepts_single_object_and_legacy_list() {
    let registry = SchemaRegistry::new();
    let me: <GetMe as Endpoint>::Output = registry
        .validate_as("me", GetMe::DESCRIPTOR.output, &fixture("me"))
        .unwrap();
    let accounts = me.accounts();
    assert!(matches!(accounts[0].provider, ProviderRef::One(_)));
    assert!(matches!(accounts[1].provider, ProviderRef::Many(_)));
    assert_eq!(accounts[1].provider.as_slice()[0].slug, "generali");
    assert!(accounts[0].is_active());
    assert!(!accounts[1].is_active());
}

#[test]
fn nullable_description_accepts_string_and_null() {
    let registry = SchemaRegistry::new();
    let categories: <GetInvestProfileCategories as Endpoint>::Output = registry
        .validate_as(
            "invest_profile_categories",
            GetInvestProfileCategories::DESCRIPTOR.output,
            &fixture("invest_profile_categories"),
        )
        .unwrap();
    assert_eq!(
        categories.members[0].description.as_deref(),
        Some("Des portefeuilles diversifiés")
    );
    assert_eq!(categories.members[1].description, None);

    let mut body = fixture("invest_profile_categories");
    body["hydra:member"][1]
        .as_object_mut()
        .unwrap()
        .remove("description");
    registry
        .validate(
            "invest_profile_categories",
            GetInvestProfileCategories::DESCRIPTOR.output,
            &body,
        )
        .unwrap();

    body["hydra:member"][1]["description"] = json!(7);
    let violations = registry
        .check(
            "invest_profile_categories",
            GetInvestProfileCategories::DESCRIPTOR.output,
            &body,
        )
        .unwrap();
    let ViolationKind::NoMatchingBranch { branches } =
        &violations.at("hydra:member[1]").unwrap().kind
    else {
        panic!("expected NoMatchingBranch: {violations}");
    };
    assert!(branches
        .iter()
        .all(|b| b.violations[0].path.to_string() == "hydra:member[1].description"));
}

#[test]
fn empty_body_fails_validation_at_root() {
    let registry = SchemaRegistry::new();
    for descriptor in ENDPOINTS {
        let violations = registry
            .check(descriptor.name, descriptor.output, &Value::Null)
            .unwrap();
        assert_eq!(violations.paths(), vec!["(root)"], "{}", descriptor.name);
    }
}

proptest! {
    #[test]
    fn removing_any_required_field_is_reported_missing(
        endpoint in 0..ENDPOINTS.len(),
        pick in any::<prop::sample::Index>(),
    ) {
        let registry = SchemaRegistry::new();
        let descriptor = ENDPOINTS[endpoint];
        let (target, prefix) = probe_target(descriptor);
        let fields = required_fields(target);
        let field = fields[pick.index(fields.len())];

        let mut body = fixture(descriptor.name);
        body.pointer_mut(prefix)
            .and_then(Value::as_object_mut)
            .unwrap()
            .remove(field.name);

        let violations = registry.check(descriptor.name, descriptor.output, &body).unwrap();
        let path = rendered(prefix, field.name);
        prop_assert!(
            matches!(
                violations.at(&path).map(|v| &v.kind),
                Some(ViolationKind::Missing { .. })
            ),
            "{}: {}", descriptor.name, violations
        );
    }
}
