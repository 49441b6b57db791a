//! Client error types.

use mpp_schema::{RemoteErrorPayload, ValidationViolations};

use crate::config::ConfigError;

/// Errors from API calls.
#[derive(Debug, thiserror::Error)]
pub enum MppApiError {
    /// The body matched neither the output shape nor a known error envelope.
    #[error("{endpoint} returned a body that does not match its shape (HTTP {status}):\n{violations}")]
    Validation {
        endpoint: &'static str,
        status: u16,
        violations: ValidationViolations,
    },

    /// The backend explicitly rejected the request.
    #[error("{endpoint} was rejected (HTTP {status}): {payload}")]
    Remote {
        endpoint: &'static str,
        status: u16,
        payload: RemoteErrorPayload,
    },

    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    /// Non-2xx status with a body that is not JSON.
    #[error("{endpoint} returned {status}: {body}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Caller input rejected before any I/O.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Coarse class of an [`MppApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Remote,
    Transport,
    Configuration,
}

impl MppApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MppApiError::Validation { .. } => ErrorKind::Validation,
            MppApiError::Remote { .. } => ErrorKind::Remote,
            MppApiError::Http { .. } | MppApiError::UnexpectedStatus { .. } => ErrorKind::Transport,
            MppApiError::Config(_) | MppApiError::InvalidInput(_) => ErrorKind::Configuration,
        }
    }

    /// The backend's error envelope, for [`MppApiError::Remote`].
    pub fn remote_payload(&self) -> Option<&RemoteErrorPayload> {
        match self {
            MppApiError::Remote { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Field-level violations, for [`MppApiError::Validation`].
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            MppApiError::Validation { violations, .. } => Some(violations),
            _ => None,
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            MppApiError::Validation { status, .. }
            | MppApiError::Remote { status, .. }
            | MppApiError::UnexpectedStatus { status, .. } => Some(*status),
            MppApiError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            MppApiError::Config(_) | MppApiError::InvalidInput(_) => None,
        }
    }
}

/// Caller-side input rejected before I/O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("username must be an e-mail address")]
    InvalidEmail,

    #[error("bearer token must not be empty")]
    EmptyToken,

    #[error("{endpoint} requires a bearer token")]
    MissingToken { endpoint: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpp_schema::remote_error::OAuthError;

    #[test]
    fn kinds() {
        let remote = MppApiError::Remote {
            endpoint: "login",
            status: 401,
            payload: RemoteErrorPayload::OAuth(OAuthError {
                error: "invalid_grant".into(),
                error_description: "Invalid user credentials".into(),
            }),
        };
        assert_eq!(remote.kind(), ErrorKind::Remote);
        assert_eq!(remote.status(), Some(401));
        assert!(remote.remote_payload().unwrap().is_oauth());
        assert!(remote.violations().is_none());

        let unexpected = MppApiError::UnexpectedStatus {
            endpoint: "me",
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(unexpected.kind(), ErrorKind::Transport);
        assert!(unexpected.remote_payload().is_none());

        let input = MppApiError::from(InputError::EmptyToken);
        assert_eq!(input.kind(), ErrorKind::Configuration);
        assert_eq!(input.status(), None);
    }

    #[test]
    fn remote_display_includes_description() {
        let err = MppApiError::Remote {
            endpoint: "login",
            status: 401,
            payload: RemoteErrorPayload::OAuth(OAuthError {
                error: "invalid_grant".into(),
                error_description: "Invalid user credentials".into(),
            }),
        };
        assert_eq!(
            err.to_string(),
            "login was rejected (HTTP 401): invalid_grant: Invalid user credentials"
        );
    }
}
