//! # mpp-cli — command-line front end for the Mon Petit Placement client
//!
//! ## Subcommands
//!
//! - `mpp tour` — log in and walk every endpoint, printing a JSON summary.
//! - `mpp endpoints` — list the endpoint registry.
//! - `mpp history <profile>` — public invest-profile history, no login.
//!
//! Base URLs come from `MPP_API_URL`, `MPP_SSO_URL`, `MPP_PUBLIC_URL`, and can
//! be overridden per facade with `--base-url <facade>=<url>`.

pub mod credentials;
pub mod endpoints;
pub mod history;
pub mod tour;

use anyhow::{Context, Result};
use mpp_client::{MppApiConfig, MppClient};

/// Build a client from the environment plus `<facade>=<url>` overrides.
pub fn build_client(overrides: &[String]) -> Result<MppClient> {
    let mut config = MppApiConfig::from_env().context("reading configuration from environment")?;
    for assignment in overrides {
        config = config
            .with_override(assignment)
            .with_context(|| format!("applying --base-url {assignment}"))?;
    }
    tracing::debug!(?config, "client configuration");
    MppClient::new(config).context("building HTTP client")
}
