//! Error envelopes the backend answers with when it rejects a request.
//!
//! The authorization server speaks OAuth (`{error, error_description}`),
//! the API speaks RFC 7807 problem details (`{type, title, detail}`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::{optional, required};

pub const OAUTH_ERROR: Shape = Shape::Object(&[
    required!("error", Shape::String),
    required!("error_description", Shape::String),
]);

pub const PROBLEM_DETAILS: Shape = Shape::Object(&[
    required!("type", Shape::String),
    required!("title", Shape::String),
    optional!("detail", Shape::String),
    optional!("status", Shape::Integer),
]);

/// Either envelope; OAuth is tried first.
pub static REMOTE_ERROR: Shape = Shape::Union(&[OAUTH_ERROR, PROBLEM_DETAILS]);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthError {
    pub error: String,
    pub error_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

/// The backend explicitly rejected the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoteErrorPayload {
    OAuth(OAuthError),
    Problem(ProblemDetails),
}

impl RemoteErrorPayload {
    pub fn is_oauth(&self) -> bool {
        matches!(self, RemoteErrorPayload::OAuth(_))
    }

    pub fn is_problem(&self) -> bool {
        matches!(self, RemoteErrorPayload::Problem(_))
    }
}

impl fmt::Display for RemoteErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteErrorPayload::OAuth(e) => write!(f, "{}: {}", e.error, e.error_description),
            RemoteErrorPayload::Problem(p) => {
                write!(f, "{} ({})", p.title, p.kind)?;
                if let Some(detail) = &p.detail {
                    write!(f, ": {detail}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaRegistry;
    use serde_json::json;

    #[test]
    fn oauth_envelope_is_recognised() {
        let registry = SchemaRegistry::new();
        let payload: RemoteErrorPayload = registry
            .validate_as(
                "remote_error",
                &REMOTE_ERROR,
                &json!({ "error": "invalid_grant", "error_description": "Invalid user credentials" }),
            )
            .unwrap();
        assert!(payload.is_oauth());
        assert_eq!(payload.to_string(), "invalid_grant: Invalid user credentials");
    }

    #[test]
    fn problem_details_are_recognised() {
        let registry = SchemaRegistry::new();
        let payload: RemoteErrorPayload = registry
            .validate_as(
                "remote_error",
                &REMOTE_ERROR,
                &json!({
                    "type": "https://tools.ietf.org/html/rfc2616#section-10",
                    "title": "An error occurred",
                    "detail": "Expired JWT Token",
                    "status": 401
                }),
            )
            .unwrap();
        assert!(payload.is_problem());
        assert_eq!(
            payload.to_string(),
            "An error occurred (https://tools.ietf.org/html/rfc2616#section-10): Expired JWT Token"
        );
    }

    #[test]
    fn ordinary_body_is_not_an_error_envelope() {
        let registry = SchemaRegistry::new();
        assert!(!registry.conforms(&REMOTE_ERROR, &json!({ "history": {} })));
        assert!(!registry.conforms(&REMOTE_ERROR, &json!(null)));
        assert!(!registry.conforms(&REMOTE_ERROR, &json!("Bad Gateway")));
    }
}
