//! The single call primitive every client method goes through.
//!
//! One request, one response, one validation. The dispatcher resolves the
//! facade before any I/O, sends the request, decodes the body as JSON, and
//! hands back the endpoint's typed output only once the body has passed its
//! shape. A body that fails the shape is checked against the known error
//! envelopes before the failure is reported.

use std::sync::Arc;

use mpp_schema::{
    Endpoint, EndpointDescriptor, Facade, HttpMethod, RemoteErrorPayload, SchemaRegistry,
    SchemaValidationError, REMOTE_ERROR,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use crate::config::{ConfigError, MppApiConfig};
use crate::credentials::BearerToken;
use crate::error::{InputError, MppApiError};

/// Longest body excerpt kept in [`MppApiError::UnexpectedStatus`].
const BODY_EXCERPT_CHARS: usize = 512;

/// Request body.
#[derive(Clone, Default)]
pub enum RequestBody {
    #[default]
    None,
    Json(Value),
    /// Already `application/x-www-form-urlencoded`.
    Form(Zeroizing<String>),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::None => f.write_str("None"),
            RequestBody::Json(_) => f.write_str("Json(..)"),
            RequestBody::Form(_) => f.write_str("Form([REDACTED])"),
        }
    }
}

/// One outgoing call, built fresh per request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub facade: Facade,
    pub method: HttpMethod,
    /// Raw path segments; percent-encoding happens when the URL is built.
    pub segments: Vec<String>,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Start a request for `descriptor`, filling its path template.
    pub fn for_endpoint(
        descriptor: &EndpointDescriptor,
        params: &[(&str, String)],
    ) -> Result<Self, MppApiError> {
        Ok(Self {
            facade: descriptor.facade,
            method: descriptor.method,
            segments: descriptor.render_path(params).map_err(ConfigError::from)?,
            headers: HeaderMap::new(),
            body: RequestBody::None,
        })
    }

    /// Add `Authorization: Bearer <token>`, marked sensitive.
    pub fn bearer(mut self, token: &BearerToken) -> Result<Self, MppApiError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
            .map_err(|_| ConfigError::InvalidHeader("authorization"))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn form(mut self, encoded: Zeroizing<String>) -> Self {
        self.body = RequestBody::Form(encoded);
        self
    }
}

/// Shared by every sub-client. Cheap to clone.
#[derive(Debug, Clone)]
pub(crate) struct Dispatcher {
    http: reqwest::Client,
    config: Arc<MppApiConfig>,
    registry: Arc<SchemaRegistry>,
}

impl Dispatcher {
    pub(crate) fn new(
        http: reqwest::Client,
        config: Arc<MppApiConfig>,
        registry: Arc<SchemaRegistry>,
    ) -> Self {
        Self {
            http,
            config,
            registry,
        }
    }

    /// Authenticated JSON GET with the given path parameters.
    pub(crate) async fn get<E: Endpoint>(
        &self,
        token: &BearerToken,
        params: &[(&str, String)],
    ) -> Result<E::Output, MppApiError> {
        let request = ApiRequest::for_endpoint(E::DESCRIPTOR, params)?
            .bearer(token)?
            .header(CONTENT_TYPE, "application/json");
        self.call::<E>(request).await
    }

    /// Send `request`, then validate and decode the body as `E::Output`.
    pub(crate) async fn call<E: Endpoint>(
        &self,
        request: ApiRequest,
    ) -> Result<E::Output, MppApiError> {
        let descriptor = E::DESCRIPTOR;
        let endpoint = descriptor.name;

        if descriptor.authenticated && !request.headers.contains_key(AUTHORIZATION) {
            return Err(InputError::MissingToken { endpoint }.into());
        }
        let url = self.url_for(&request)?;

        tracing::debug!(
            facade = %request.facade,
            method = %request.method,
            path = descriptor.path,
            "dispatching"
        );

        let builder = match request.method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url),
        }
        .headers(request.headers);
        let builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Form(encoded) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded.as_str().to_owned()),
        };

        let resp = builder
            .send()
            .await
            .map_err(|source| MppApiError::Http { endpoint, source })?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| MppApiError::Http { endpoint, source })?;

        tracing::debug!(
            facade = %request.facade,
            method = %request.method,
            path = descriptor.path,
            status = status.as_u16(),
            "response received"
        );

        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(MppApiError::UnexpectedStatus {
                    endpoint,
                    status: status.as_u16(),
                    body: excerpt(&bytes),
                })
            }
            Err(_) => Value::Null,
        };

        self.interpret::<E>(status.as_u16(), &body)
    }

    /// Validate a decoded body. Never returns an unvalidated value.
    fn interpret<E: Endpoint>(&self, status: u16, body: &Value) -> Result<E::Output, MppApiError> {
        let descriptor = E::DESCRIPTOR;
        let endpoint = descriptor.name;

        let violations = match self
            .registry
            .validate_as::<E::Output>(endpoint, descriptor.output, body)
        {
            Ok(output) => {
                tracing::trace!(shape = endpoint, status, "body matches shape");
                return Ok(output);
            }
            Err(SchemaValidationError::ValidationFailed { violations, .. }) => violations,
            Err(SchemaValidationError::ValidatorBuildError { shape_name, reason }) => {
                return Err(ConfigError::Shape { shape_name, reason }.into())
            }
        };

        match self
            .registry
            .validate_as::<RemoteErrorPayload>("remote_error", &REMOTE_ERROR, body)
        {
            Ok(payload) => {
                tracing::warn!(shape = endpoint, status, "request rejected by the backend");
                Err(MppApiError::Remote {
                    endpoint,
                    status,
                    payload,
                })
            }
            Err(_) => {
                tracing::debug!(
                    shape = endpoint,
                    status,
                    violations = violations.len(),
                    "body does not match shape"
                );
                Err(MppApiError::Validation {
                    endpoint,
                    status,
                    violations,
                })
            }
        }
    }

    /// Join the request's segments under its facade's base URL.
    fn url_for(&self, request: &ApiRequest) -> Result<Url, MppApiError> {
        let mut url = self.config.base_url(request.facade)?.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ConfigError::InvalidUrl(request.facade.to_string(), "not a base URL".into())
            })?;
            segments.pop_if_empty().extend(&request.segments);
        }
        Ok(url)
    }
}

fn excerpt(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(BODY_EXCERPT_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpp_schema::v1::accounts::GetInvestmentAccountProvider;
    use mpp_schema::v1::me::GetMe;
    use mpp_schema::ViolationKind;

    fn dispatcher(config: MppApiConfig) -> Dispatcher {
        Dispatcher::new(
            reqwest::Client::new(),
            Arc::new(config),
            Arc::new(SchemaRegistry::new()),
        )
    }

    #[test]
    fn url_percent_encodes_string_segments() {
        let d = dispatcher(MppApiConfig::local_mock("http://127.0.0.1:9000/base").unwrap());
        let request = ApiRequest::for_endpoint(
            GetInvestmentAccountProvider::DESCRIPTOR,
            &[("provider", "a b/c?".to_string())],
        )
        .unwrap();
        assert_eq!(
            d.url_for(&request).unwrap().as_str(),
            "http://127.0.0.1:9000/base/v1/investment_account_providers/a%20b%2Fc%3F"
        );
    }

    #[test]
    fn missing_path_parameter_is_a_configuration_error() {
        let err = ApiRequest::for_endpoint(GetInvestmentAccountProvider::DESCRIPTOR, &[]).unwrap_err();
        assert!(matches!(err, MppApiError::Config(ConfigError::PathTemplate(_))));
    }

    #[test]
    fn unconfigured_facade_fails_before_io() {
        let d = dispatcher(MppApiConfig::default().without_facade(Facade::Api));
        let request = ApiRequest::for_endpoint(GetMe::DESCRIPTOR, &[]).unwrap();
        let err = d.url_for(&request).unwrap_err();
        assert!(matches!(
            err,
            MppApiError::Config(ConfigError::UnconfiguredFacade(Facade::Api))
        ));
    }

    #[test]
    fn problem_details_body_is_reported_as_remote() {
        let d = dispatcher(MppApiConfig::default());
        let body = serde_json::json!({
            "type": "https://tools.ietf.org/html/rfc2616#section-10",
            "title": "An error occurred",
            "detail": "Not Found"
        });
        let err = d.interpret::<GetMe>(404, &body).unwrap_err();
        assert!(err.remote_payload().unwrap().is_problem());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn null_body_is_a_validation_failure() {
        let d = dispatcher(MppApiConfig::default());
        let err = d.interpret::<GetMe>(200, &Value::Null).unwrap_err();
        let violations = err.violations().unwrap();
        assert_eq!(violations.paths(), vec!["(root)"]);
        assert!(matches!(
            violations.violations()[0].kind,
            ViolationKind::TypeMismatch { found: "null", .. }
        ));
    }

    #[test]
    fn excerpt_is_bounded() {
        let long = "x".repeat(2 * BODY_EXCERPT_CHARS);
        assert_eq!(excerpt(long.as_bytes()).len(), BODY_EXCERPT_CHARS);
    }

    #[test]
    fn form_body_debug_is_redacted() {
        let body = RequestBody::Form(Zeroizing::new("password=hunter2".into()));
        assert_eq!(format!("{body:?}"), "Form([REDACTED])");
    }
}
