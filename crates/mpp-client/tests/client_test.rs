//! Client tests against a wiremock stand-in for all three facades.
//!
//! Response bodies come from the schema crate's fixtures, so the bodies the
//! client is tested with are the same ones the shapes are tested with.

use std::path::PathBuf;

use mpp_client::{
    BearerToken, ConfigError, Credentials, ErrorKind, MppApiConfig, MppApiError, MppClient,
};
use mpp_schema::public::PUBLIC_PROFILES;
use mpp_schema::{Facade, ViolationKind};
use serde_json::{json, Value};
use tokio::task::JoinSet;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const LOGIN_PATH: &str = "/auth/realms/mpp-prod/protocol/openid-connect/token";

fn fixture(name: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../mpp-schema/tests/fixtures");
    path.push(format!("{name}.json"));
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}

fn test_client(mock_server: &MockServer) -> MppClient {
    MppClient::new(MppApiConfig::local_mock(&mock_server.uri()).unwrap()).unwrap()
}

fn token() -> BearerToken {
    BearerToken::new("tok123").unwrap()
}

/// Serve `GET {path}` with the named fixture, once, to bearer `tok123` only.
async fn mount_get(mock_server: &MockServer, route: &str, fixture_name: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", "Bearer tok123"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture(fixture_name)))
        .expect(1)
        .mount(mock_server)
        .await;
}

// ── Login ────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_posts_exact_form_and_returns_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=password&client_id=mpp-app&username=a%40b.com&password=x",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("login")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let creds = Credentials::new("a@b.com", "x").unwrap();
    let envelope = client.auth().login(&creds).await.unwrap();

    assert_eq!(envelope.access_token, "tok123");
    assert_eq!(envelope.expires_in, 300);
    assert_eq!(BearerToken::from_envelope(&envelope).unwrap().expose(), "tok123");
}

#[tokio::test]
async fn login_rejection_surfaces_oauth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid user credentials"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let creds = Credentials::new("a@b.com", "wrong").unwrap();
    let err = client.auth().login(&creds).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.status(), Some(401));
    let payload = err.remote_payload().unwrap();
    assert!(payload.is_oauth());
    assert_eq!(payload.to_string(), "invalid_grant: Invalid user credentials");
}

#[tokio::test]
async fn unconfigured_facade_fails_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("login")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = MppApiConfig::local_mock(&mock_server.uri())
        .unwrap()
        .without_facade(Facade::Sso);
    let client = MppClient::new(config).unwrap();
    let creds = Credentials::new("a@b.com", "x").unwrap();
    let err = client.auth().login(&creds).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(matches!(
        err,
        MppApiError::Config(ConfigError::UnconfiguredFacade(Facade::Sso))
    ));
}

// ── Authenticated endpoints ──────────────────────────────────────────

#[tokio::test]
async fn me_sends_bearer_and_decodes_profile() {
    let mock_server = MockServer::start().await;
    mount_get(&mock_server, "/v1/me", "me").await;

    let client = test_client(&mock_server);
    let me = client.users().me(&token()).await.unwrap();

    assert_eq!(me.id, 1842);
    assert_eq!(me.accounts().len(), 2);
    assert!(me.accounts()[0].is_active());
}

#[tokio::test]
async fn every_authenticated_endpoint_substitutes_its_path() {
    let mock_server = MockServer::start().await;
    let routes = [
        ("/v1/settings/twitch.json", "twitch"),
        ("/v1/settings/advice-waiting-video.json", "advice_waiting_video"),
        ("/v1/users/1842/user_kycs", "user_kycs"),
        ("/v1/users/1842/user_coupons", "user_coupons"),
        ("/v1/users/1842/coupons", "coupons"),
        ("/v1/advice/77", "advice"),
        ("/v1/user_investment_accounts/4312/advice_dto", "advice_dto"),
        ("/v1/invest_profile_categories", "invest_profile_categories"),
        ("/v1/invest_profiles", "invest_profiles"),
        ("/v1/user_investment_accounts/4312", "user_investment_account"),
        (
            "/v1/user_investment_accounts/4312/user_financial_capital",
            "user_financial_capital",
        ),
        (
            "/v1/user_investment_accounts/4312/user_investment_values",
            "user_investment_values",
        ),
        (
            "/v1/user_investment_accounts/4312/user_investment_account_products",
            "user_investment_account_products",
        ),
        ("/v1/investment_account_providers/apicil", "investment_account_provider"),
        ("/v1/kyc_categories", "kyc_categories"),
        ("/v1/investment_account_providers/apicil/kyc_questions", "kyc_questions"),
        ("/v1/user_kycs/9001/available_products", "available_products"),
        (
            "/v1/user_kycs/9001/consulting_analysis/initial",
            "initial_consulting_analysis",
        ),
        (
            "/v1/user_kycs/9001/consulting_analysis/monthly",
            "monthly_consulting_analysis",
        ),
    ];
    for (route, name) in routes {
        mount_get(&mock_server, route, name).await;
    }

    let client = test_client(&mock_server);
    let token = token();

    client.settings().twitch(&token).await.unwrap();
    client.settings().advice_waiting_video(&token).await.unwrap();
    client.users().kycs(&token, 1842).await.unwrap();
    client.users().user_coupons(&token, 1842).await.unwrap();
    client.users().coupons(&token, 1842).await.unwrap();
    client.advice().advice(&token, 77).await.unwrap();
    client.advice().advice_dto(&token, 4312).await.unwrap();
    client.invest_profiles().categories(&token).await.unwrap();
    client.invest_profiles().profiles(&token).await.unwrap();
    client.accounts().account(&token, "4312").await.unwrap();
    client.accounts().financial_capital(&token, 4312).await.unwrap();
    client.accounts().investment_values(&token, 4312).await.unwrap();
    client.accounts().account_products(&token, 4312).await.unwrap();
    client.accounts().provider(&token, "apicil").await.unwrap();
    client.kyc().categories(&token).await.unwrap();
    client.kyc().questions(&token, "apicil").await.unwrap();
    client.kyc().available_products(&token, 9001).await.unwrap();
    client.kyc().initial_consulting_analysis(&token, 9001).await.unwrap();
    client.kyc().monthly_consulting_analysis(&token, 9001).await.unwrap();
}

#[tokio::test]
async fn string_path_segments_are_percent_encoded() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/v1/investment_account_providers/apicil%20vie%2F2",
        "investment_account_provider",
    )
    .await;

    let client = test_client(&mock_server);
    client.accounts().provider(&token(), "apicil vie/2").await.unwrap();
}

// ── Failure paths ────────────────────────────────────────────────────

#[tokio::test]
async fn shape_violation_names_the_field_path() {
    let mock_server = MockServer::start().await;
    let mut body = fixture("me");
    body["investmentAccounts"][1]
        .as_object_mut()
        .unwrap()
        .remove("status");

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.users().me(&token()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.status(), Some(200));
    let violations = err.violations().unwrap();
    assert_eq!(violations.paths(), vec!["investmentAccounts[1].status"]);
    assert!(matches!(
        violations.violations()[0].kind,
        ViolationKind::Missing { .. }
    ));
}

#[tokio::test]
async fn problem_details_are_reported_as_remote() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "type": "https://tools.ietf.org/html/rfc2616#section-10",
            "title": "An error occurred",
            "detail": "Expired JWT Token",
            "status": 401
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.users().me(&token()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Remote);
    assert!(err.remote_payload().unwrap().is_problem());
}

#[tokio::test]
async fn non_json_error_body_is_unexpected_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/kyc_categories"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.kyc().categories(&token()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        MppApiError::UnexpectedStatus {
            endpoint,
            status,
            body,
        } => {
            assert_eq!(endpoint, "kyc_categories");
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_success_body_fails_validation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/settings/twitch.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.settings().twitch(&token()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.violations().unwrap().paths(), vec!["(root)"]);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let config = MppApiConfig::local_mock("http://127.0.0.1:1").unwrap();
    let client = MppClient::new(config).unwrap();
    let err = client.users().me(&token()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(matches!(err, MppApiError::Http { endpoint: "me", .. }));
}

// ── Public site ──────────────────────────────────────────────────────

#[tokio::test]
async fn history_posts_null_with_site_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/invest-profile/history/ambitieux"))
        .and(|req: &Request| {
            req.headers
                .get("accept")
                .and_then(|v| v.to_str().ok())
                == Some("application/json, text/plain, */*")
        })
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(header("content-type", "application/json"))
        .and(body_string("null"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("invest_profile_history")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let history = client
        .public()
        .invest_profile_history("ambitieux")
        .await
        .unwrap();
    assert!(!history.history.is_empty());
}

#[tokio::test]
async fn concurrent_history_fetches_resolve_independently() {
    let mock_server = MockServer::start().await;

    for (i, profile) in PUBLIC_PROFILES.into_iter().enumerate() {
        Mock::given(method("POST"))
            .and(path(format!("/invest-profile/history/{profile}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "history": { "2021-01-01": 100.5 + i as f64 } })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = test_client(&mock_server);
    let mut tasks = JoinSet::new();
    for (i, profile) in PUBLIC_PROFILES.into_iter().enumerate() {
        let client = client.clone();
        tasks.spawn(async move {
            let history = client.public().invest_profile_history(profile).await;
            (i, history)
        });
    }

    let mut seen = 0;
    while let Some(joined) = tasks.join_next().await {
        let (i, history) = joined.unwrap();
        let history = history.unwrap();
        assert_eq!(history.history["2021-01-01"], 100.5 + i as f64);
        seen += 1;
    }
    assert_eq!(seen, PUBLIC_PROFILES.len());
}
