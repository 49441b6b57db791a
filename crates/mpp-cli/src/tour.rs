//! # Tour Subcommand
//!
//! Logs in and walks every endpoint the client knows, in the order a user
//! session would reach them. Independent fetches (public histories, and the
//! per-account and per-KYC calls) run concurrently. Prints a JSON summary of
//! what came back; any failure stops the tour.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::future::Future;

use anyhow::{Context, Result};
use mpp_client::{BearerToken, Credentials, MppApiError, MppClient};
use mpp_schema::public::PUBLIC_PROFILES;
use serde::Serialize;
use tokio::task::JoinSet;

/// What the tour saw, endpoint by endpoint.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct TourSummary {
    pub user_id: i64,
    pub email: String,
    pub twitch_live: bool,
    /// Data points per public profile.
    pub histories: BTreeMap<String, usize>,
    pub invest_profile_categories: i64,
    pub invest_profiles: i64,
    pub user_coupons: i64,
    pub coupons: i64,
    pub kycs: Vec<KycSummary>,
    pub accounts: Vec<AccountSummary>,
    pub kyc_categories: i64,
    /// Questions per insurer slug.
    pub kyc_questions: BTreeMap<String, i64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct KycSummary {
    pub id: i64,
    pub status: String,
    pub available_products: i64,
    pub initial_allocations: usize,
    pub monthly_allocations: usize,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AccountSummary {
    pub id: String,
    pub status: String,
    pub providers: Vec<String>,
    pub advice_id: String,
    pub advisor: String,
    /// `None` for pending accounts, which the backend refuses to value.
    pub valuation: Option<Valuation>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Valuation {
    pub amount: f64,
    pub performance: f64,
    pub values: i64,
    pub products: usize,
}

/// Run the full tour.
pub async fn run_tour(client: &MppClient, credentials: &Credentials) -> Result<TourSummary> {
    let envelope = client.auth().login(credentials).await.context("login failed")?;
    let token = BearerToken::from_envelope(&envelope)?;
    tracing::info!(username = credentials.username(), "logged in");

    let me = client.users().me(&token).await.context("fetching profile")?;
    let mut summary = TourSummary {
        user_id: me.id,
        email: me.email.clone(),
        ..TourSummary::default()
    };

    let histories = fan_out(PUBLIC_PROFILES.to_vec(), |profile| {
        let client = client.clone();
        async move { client.public().invest_profile_history(profile).await }
    })
    .await?;
    summary.histories = histories
        .into_iter()
        .map(|(profile, h)| (profile.to_string(), h.history.len()))
        .collect();

    summary.twitch_live = client.settings().twitch(&token).await?.value.is_live;
    client.settings().advice_waiting_video(&token).await?;

    summary.invest_profile_categories = client.invest_profiles().categories(&token).await?.total_items;
    summary.invest_profiles = client.invest_profiles().profiles(&token).await?.total_items;
    summary.user_coupons = client.users().user_coupons(&token, me.id).await?.total_items;
    summary.coupons = client.users().coupons(&token, me.id).await?.total_items;

    let kycs = client.users().kycs(&token, me.id).await?;
    let kyc_ids = kycs
        .iter()
        .map(|kyc| numeric_id("user KYC", &kyc.id))
        .collect::<Result<Vec<_>>>()?;
    let kyc_details = fan_out(kyc_ids, |id| {
        let (client, token) = (client.clone(), token.clone());
        async move {
            let products = client.kyc().available_products(&token, id).await?;
            let initial = client.kyc().initial_consulting_analysis(&token, id).await?;
            let monthly = client.kyc().monthly_consulting_analysis(&token, id).await?;
            Ok::<_, MppApiError>((products.total_items, initial.len(), monthly.len()))
        }
    })
    .await?;
    summary.kycs = kycs
        .iter()
        .zip(kyc_details)
        .map(|(kyc, (id, (products, initial, monthly)))| KycSummary {
            id,
            status: kyc.status.clone(),
            available_products: products,
            initial_allocations: initial,
            monthly_allocations: monthly,
        })
        .collect();

    let accounts = me.accounts().to_vec();
    summary.accounts = fan_out((0..accounts.len()).collect(), |index| {
        let (client, token) = (client.clone(), token.clone());
        let account = accounts[index].clone();
        async move { account_summary(&client, &token, &account).await }
    })
    .await?
    .into_iter()
    .map(|(_, account)| account)
    .collect();

    summary.kyc_categories = client.kyc().categories(&token).await?.total_items;

    let mut slugs: Vec<String> = me
        .accounts()
        .iter()
        .flat_map(|account| account.provider.as_slice())
        .map(|provider| provider.slug.clone())
        .collect();
    slugs.sort();
    slugs.dedup();
    for slug in slugs {
        client.accounts().provider(&token, &slug).await?;
        let questions = client.kyc().questions(&token, &slug).await?;
        summary.kyc_questions.insert(slug, questions.total_items);
    }

    Ok(summary)
}

async fn account_summary(
    client: &MppClient,
    token: &BearerToken,
    account: &mpp_schema::v1::me::ProfileInvestmentAccount,
) -> Result<AccountSummary, MppApiError> {
    let numeric = account.id.parse::<i64>().ok();
    let dto = match numeric {
        Some(id) => Some(client.advice().advice_dto(token, id).await?),
        None => None,
    };
    let advice = match dto.as_ref().and_then(|dto| dto.advice_id.parse::<i64>().ok()) {
        Some(advice_id) => Some(client.advice().advice(token, advice_id).await?),
        None => None,
    };

    let valuation = match numeric {
        Some(id) if account.is_active() => {
            client.accounts().account(token, &account.id).await?;
            let capital = client.accounts().financial_capital(token, id).await?;
            let values = client.accounts().investment_values(token, id).await?;
            let products = client.accounts().account_products(token, id).await?;
            Some(Valuation {
                amount: capital.amount,
                performance: capital.performance,
                values: values.total_items,
                products: products.members.len(),
            })
        }
        _ => None,
    };

    Ok(AccountSummary {
        id: account.id.clone(),
        status: account.status.clone(),
        providers: account
            .provider
            .as_slice()
            .iter()
            .map(|p| p.slug.clone())
            .collect(),
        advice_id: dto.map(|dto| dto.advice_id).unwrap_or_default(),
        advisor: advice
            .map(|advice| advice.advisor.firstname)
            .unwrap_or_default(),
        valuation,
    })
}

/// The backend renders numeric ids as strings; path parameters want numbers.
fn numeric_id(what: &str, raw: &str) -> Result<i64> {
    raw.parse()
        .with_context(|| format!("{what} id '{raw}' is not numeric"))
}

/// Run one call per key concurrently; results keep the order of `keys`.
async fn fan_out<K, T, F, Fut>(keys: Vec<K>, call: F) -> Result<Vec<(K, T)>>
where
    K: Clone + Display + Send + 'static,
    T: Send + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, MppApiError>> + Send + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, key) in keys.into_iter().enumerate() {
        let pending = call(key.clone());
        tasks.spawn(async move { (index, key, pending.await) });
    }

    let mut done = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, key, result) = joined.context("request task panicked")?;
        let value = result.with_context(|| format!("request for {key} failed"))?;
        done.push((index, key, value));
    }
    done.sort_by_key(|(index, _, _)| *index);
    Ok(done.into_iter().map(|(_, key, value)| (key, value)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids() {
        assert_eq!(numeric_id("user KYC", "9001").unwrap(), 9001);
        let err = numeric_id("user KYC", "/v1/user_kycs/9001").unwrap_err();
        assert_eq!(err.to_string(), "user KYC id '/v1/user_kycs/9001' is not numeric");
    }

    #[tokio::test]
    async fn fan_out_keeps_key_order() {
        let results = fan_out(vec![3u64, 1, 2], |n| async move {
            tokio::time::sleep(std::time::Duration::from_millis(n * 5)).await;
            Ok::<_, MppApiError>(n * 10)
        })
        .await
        .unwrap();
        assert_eq!(results, vec![(3, 30), (1, 10), (2, 20)]);
    }
}
