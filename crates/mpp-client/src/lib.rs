//! # mpp-client — Typed client for the Mon Petit Placement API
//!
//! Async, schema-validated access to the three backend facades:
//! - **api** (`api.monpetitplacement.fr`): the authenticated `v1/` endpoints
//! - **sso** (`sso.monpetitplacement.fr`): password-grant login
//! - **public** (`www.monpetitplacement.fr`): anonymous profile history
//!
//! Every method performs exactly one HTTP round trip and returns either the
//! endpoint's typed output, validated against its shape from
//! [`mpp_schema::registry`], or an [`MppApiError`]. Nothing is retried and
//! nothing is cached. The client retains no session: callers pass the
//! [`BearerToken`] from [`AuthClient::login`](auth::AuthClient::login) to
//! each authenticated call.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use mpp_client::{BearerToken, Credentials, MppApiConfig, MppClient};
//!
//! let client = MppClient::new(MppApiConfig::from_env()?)?;
//! let envelope = client
//!     .auth()
//!     .login(&Credentials::new("jane@example.com", "secret")?)
//!     .await?;
//! let token = BearerToken::from_envelope(&envelope)?;
//! let me = client.users().me(&token).await?;
//! println!("{} has {} accounts", me.email, me.accounts().len());
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod advice;
pub mod auth;
pub mod config;
pub mod credentials;
pub mod dispatch;
pub mod error;
pub mod invest_profiles;
pub mod kyc;
pub mod public;
pub mod settings;
pub mod users;

pub use config::{ConfigError, MppApiConfig};
pub use credentials::{BearerToken, Credentials};
pub use error::{ErrorKind, InputError, MppApiError};

use std::sync::Arc;
use std::time::Duration;

use mpp_schema::registry::ENDPOINTS;
use mpp_schema::{SchemaRegistry, SchemaValidationError};

use crate::dispatch::Dispatcher;

/// Top-level client. Holds one sub-client per backend area.
///
/// Cloning is cheap; clones share the connection pool and compiled shapes.
#[derive(Debug, Clone)]
pub struct MppClient {
    auth: auth::AuthClient,
    users: users::UsersClient,
    advice: advice::AdviceClient,
    invest_profiles: invest_profiles::InvestProfilesClient,
    accounts: accounts::AccountsClient,
    kyc: kyc::KycClient,
    settings: settings::SettingsClient,
    public: public::PublicClient,
}

impl MppClient {
    /// Create a client from configuration.
    ///
    /// Compiles every endpoint's output shape up front, so a malformed
    /// shape surfaces here rather than on first use.
    pub fn new(config: MppApiConfig) -> Result<Self, MppApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| MppApiError::Http {
            endpoint: "client_init",
            source: e,
        })?;

        let registry = SchemaRegistry::with_endpoints(ENDPOINTS).map_err(|e| match e {
            SchemaValidationError::ValidatorBuildError { shape_name, reason } => {
                ConfigError::Shape { shape_name, reason }
            }
            SchemaValidationError::ValidationFailed { shape_name, violations } => {
                ConfigError::Shape {
                    shape_name,
                    reason: violations.to_string(),
                }
            }
        })?;

        let dispatcher = Dispatcher::new(http, Arc::new(config), Arc::new(registry));
        Ok(Self {
            auth: auth::AuthClient::new(dispatcher.clone()),
            users: users::UsersClient::new(dispatcher.clone()),
            advice: advice::AdviceClient::new(dispatcher.clone()),
            invest_profiles: invest_profiles::InvestProfilesClient::new(dispatcher.clone()),
            accounts: accounts::AccountsClient::new(dispatcher.clone()),
            kyc: kyc::KycClient::new(dispatcher.clone()),
            settings: settings::SettingsClient::new(dispatcher.clone()),
            public: public::PublicClient::new(dispatcher),
        })
    }

    /// Access the login client (sso facade).
    pub fn auth(&self) -> &auth::AuthClient {
        &self.auth
    }

    /// Access the user profile, KYC record and coupon client.
    pub fn users(&self) -> &users::UsersClient {
        &self.users
    }

    /// Access the advice client.
    pub fn advice(&self) -> &advice::AdviceClient {
        &self.advice
    }

    /// Access the invest-profile client.
    pub fn invest_profiles(&self) -> &invest_profiles::InvestProfilesClient {
        &self.invest_profiles
    }

    /// Access the investment-account client.
    pub fn accounts(&self) -> &accounts::AccountsClient {
        &self.accounts
    }

    /// Access the KYC questionnaire client.
    pub fn kyc(&self) -> &kyc::KycClient {
        &self.kyc
    }

    /// Access the settings client.
    pub fn settings(&self) -> &settings::SettingsClient {
        &self.settings
    }

    /// Access the public-site client (no authentication).
    pub fn public(&self) -> &public::PublicClient {
        &self.public
    }
}
