//! Password-grant login against the SSO realm.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::shape::Shape;
use crate::required;

/// OAuth client the backend issues tokens to.
pub const CLIENT_ID: &str = "mpp-app";

/// OAuth grant used by [`Login`].
pub const GRANT_TYPE: &str = "password";

pub const LOGIN_INPUT: Shape = Shape::StrictObject(&[
    required!("username", Shape::String),
    required!("password", Shape::String),
]);

pub const TOKEN_ENVELOPE: Shape = Shape::Object(&[
    required!("access_token", Shape::String),
    required!("expires_in", Shape::Integer),
    required!("not-before-policy", Shape::Integer),
    required!("refresh_expires_in", Shape::Integer),
    required!("refresh_token", Shape::String),
    required!("scope", Shape::String),
    required!("session_state", Shape::String),
    required!("token_type", Shape::String),
]);

pub const LOGIN: EndpointDescriptor = EndpointDescriptor {
    name: "login",
    method: HttpMethod::Post,
    path: "auth/realms/mpp-prod/protocol/openid-connect/token",
    facade: Facade::Sso,
    authenticated: false,
    input: &LOGIN_INPUT,
    output: &TOKEN_ENVELOPE,
};

/// Token envelope returned by the authorization server.
///
/// `Debug` redacts both tokens.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEnvelope {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(rename = "not-before-policy")]
    pub not_before_policy: i64,
    pub refresh_expires_in: i64,
    pub refresh_token: String,
    pub scope: String,
    pub session_state: String,
    pub token_type: String,
}

impl fmt::Debug for TokenEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenEnvelope")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("not_before_policy", &self.not_before_policy)
            .field("refresh_expires_in", &self.refresh_expires_in)
            .field("refresh_token", &"[REDACTED]")
            .field("scope", &self.scope)
            .field("session_state", &self.session_state)
            .field("token_type", &self.token_type)
            .finish()
    }
}

pub struct Login;

impl Endpoint for Login {
    type Output = TokenEnvelope;
    const DESCRIPTOR: &'static EndpointDescriptor = &LOGIN;
}
