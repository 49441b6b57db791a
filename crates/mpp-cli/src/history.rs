//! `mpp history <profile>`: anonymous call to the public site.

use anyhow::{Context, Result};
use mpp_client::MppClient;
use mpp_schema::public::InvestProfileHistory;

pub async fn run_history(client: &MppClient, profile: &str) -> Result<InvestProfileHistory> {
    client
        .public()
        .invest_profile_history(profile)
        .await
        .with_context(|| format!("fetching history of profile '{profile}'"))
}
