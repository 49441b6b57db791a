//! Secrets the caller threads through the client.
//!
//! Both types redact themselves in `Debug` and wipe their memory on drop.

use std::fmt;

use mpp_schema::auth::TokenEnvelope;
use zeroize::Zeroizing;

use crate::error::InputError;

/// Opaque access token returned by login.
#[derive(Clone)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Result<Self, InputError> {
        let token = Zeroizing::new(token.into());
        if token.trim().is_empty() {
            return Err(InputError::EmptyToken);
        }
        Ok(Self(token))
    }

    /// The access token of a login response.
    pub fn from_envelope(envelope: &TokenEnvelope) -> Result<Self, InputError> {
        Self::new(envelope.access_token.clone())
    }

    /// The raw token. Only the dispatcher's header builder should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

/// Username and password for the password grant.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// # Errors
    ///
    /// [`InputError::InvalidEmail`] unless the username looks like
    /// `local@domain.tld`. The password is passed through as given, empty
    /// included; the SSO decides whether it is acceptable.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, InputError> {
        let username = username.into().trim().to_string();
        let password = Zeroizing::new(password.into());
        if !looks_like_email(&username) {
            return Err(InputError::InvalidEmail);
        }
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn looks_like_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !candidate.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
