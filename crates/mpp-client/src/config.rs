//! Client configuration.
//!
//! One base URL per facade. Defaults point at production; override via
//! environment variables or explicit construction for staging and tests.
//! A facade may be left unconfigured, in which case every call routed to
//! it fails before any network I/O.

use std::str::FromStr;

use mpp_schema::{Facade, PathTemplateError, UnknownFacade};
use url::Url;

/// Configuration for connecting to the backend facades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MppApiConfig {
    /// Base URL of the main REST API.
    /// Default: <https://api.monpetitplacement.fr/>
    pub api_url: Option<Url>,
    /// Base URL of the SSO server.
    pub sso_url: Option<Url>,
    /// Base URL of the public site.
    pub public_url: Option<Url>,
    /// Request timeout in seconds. `None` leaves the HTTP stack default.
    pub timeout_secs: Option<u64>,
}

impl Default for MppApiConfig {
    fn default() -> Self {
        let production = |facade: Facade| Url::parse(facade.production_url()).ok();
        Self {
            api_url: production(Facade::Api),
            sso_url: production(Facade::Sso),
            public_url: production(Facade::Public),
            timeout_secs: None,
        }
    }
}

impl MppApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MPP_API_URL` (default: `https://api.monpetitplacement.fr/`)
    /// - `MPP_SSO_URL` (default: `https://sso.monpetitplacement.fr/`)
    /// - `MPP_PUBLIC_URL` (default: `https://www.monpetitplacement.fr/`)
    /// - `MPP_TIMEOUT_SECS` (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: Some(env_url("MPP_API_URL", Facade::Api)?),
            sso_url: Some(env_url("MPP_SSO_URL", Facade::Sso)?),
            public_url: Some(env_url("MPP_PUBLIC_URL", Facade::Public)?),
            timeout_secs: match std::env::var("MPP_TIMEOUT_SECS") {
                Ok(raw) => Some(
                    raw.parse()
                        .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
                ),
                Err(_) => None,
            },
        })
    }

    /// Point every facade at one mock server (for testing).
    pub fn local_mock(base_url: &str) -> Result<Self, ConfigError> {
        let url = parse_base_url("mock", base_url)?;
        Ok(Self {
            api_url: Some(url.clone()),
            sso_url: Some(url.clone()),
            public_url: Some(url),
            timeout_secs: Some(5),
        })
    }

    /// Remove a facade's base URL.
    pub fn without_facade(mut self, facade: Facade) -> Self {
        *self.slot(facade) = None;
        self
    }

    /// Set a facade's base URL.
    pub fn with_facade(mut self, facade: Facade, base_url: &str) -> Result<Self, ConfigError> {
        *self.slot(facade) = Some(parse_base_url(facade.as_str(), base_url)?);
        Ok(self)
    }

    /// Apply a `<facade>=<url>` override, e.g. `api=http://localhost:8080`.
    pub fn with_override(self, assignment: &str) -> Result<Self, ConfigError> {
        let (name, url) = assignment
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedOverride(assignment.to_string()))?;
        let facade = Facade::from_str(name.trim())?;
        self.with_facade(facade, url.trim())
    }

    /// Base URL for `facade`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnconfiguredFacade`] if it was removed.
    pub fn base_url(&self, facade: Facade) -> Result<&Url, ConfigError> {
        match facade {
            Facade::Api => self.api_url.as_ref(),
            Facade::Sso => self.sso_url.as_ref(),
            Facade::Public => self.public_url.as_ref(),
        }
        .ok_or(ConfigError::UnconfiguredFacade(facade))
    }

    fn slot(&mut self, facade: Facade) -> &mut Option<Url> {
        match facade {
            Facade::Api => &mut self.api_url,
            Facade::Sso => &mut self.sso_url,
            Facade::Public => &mut self.public_url,
        }
    }
}

fn env_url(var: &str, facade: Facade) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| facade.production_url().to_string());
    parse_base_url(var, &raw)
}

/// Parse a base URL, making sure relative endpoint paths join under it.
fn parse_base_url(label: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(label.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            label.to_string(),
            "not a base URL".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),

    #[error("MPP_TIMEOUT_SECS must be a whole number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("no base URL configured for the '{0}' facade")]
    UnconfiguredFacade(Facade),

    #[error(transparent)]
    UnknownFacade(#[from] UnknownFacade),

    #[error("expected <facade>=<url>, got '{0}'")]
    MalformedOverride(String),

    #[error(transparent)]
    PathTemplate(#[from] PathTemplateError),

    #[error("header '{0}' has an invalid value")]
    InvalidHeader(&'static str),

    #[error("shape '{shape_name}' cannot be compiled: {reason}")]
    Shape { shape_name: String, reason: String },
}
