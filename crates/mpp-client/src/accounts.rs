//! Investment accounts and their insurers.

use mpp_schema::v1::accounts::{
    AccountProducts, FinancialCapital, GetAccountProducts, GetFinancialCapital,
    GetInvestmentAccountProvider, GetInvestmentValues, GetUserInvestmentAccount,
    InvestmentAccountProvider, InvestmentValues, UserInvestmentAccount,
};

use crate::credentials::BearerToken;
use crate::dispatch::Dispatcher;
use crate::error::MppApiError;

const ACCOUNT_ID: &str = "userInvestmentAccountId";

#[derive(Debug, Clone)]
pub struct AccountsClient {
    dispatcher: Dispatcher,
}

impl AccountsClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// One account, addressed by the id string the profile lists it under.
    ///
    /// Calls `GET {api}/v1/user_investment_accounts/{id}`.
    pub async fn account(
        &self,
        token: &BearerToken,
        account_id: &str,
    ) -> Result<UserInvestmentAccount, MppApiError> {
        self.dispatcher
            .get::<GetUserInvestmentAccount>(token, &[(ACCOUNT_ID, account_id.to_string())])
            .await
    }

    /// Calls `GET {api}/v1/user_investment_accounts/{id}/user_financial_capital`.
    pub async fn financial_capital(
        &self,
        token: &BearerToken,
        account_id: i64,
    ) -> Result<FinancialCapital, MppApiError> {
        self.dispatcher
            .get::<GetFinancialCapital>(token, &[(ACCOUNT_ID, account_id.to_string())])
            .await
    }

    /// Valuation history.
    ///
    /// Calls `GET {api}/v1/user_investment_accounts/{id}/user_investment_values`.
    pub async fn investment_values(
        &self,
        token: &BearerToken,
        account_id: i64,
    ) -> Result<InvestmentValues, MppApiError> {
        self.dispatcher
            .get::<GetInvestmentValues>(token, &[(ACCOUNT_ID, account_id.to_string())])
            .await
    }

    /// Calls `GET {api}/v1/user_investment_accounts/{id}/user_investment_account_products`.
    pub async fn account_products(
        &self,
        token: &BearerToken,
        account_id: i64,
    ) -> Result<AccountProducts, MppApiError> {
        self.dispatcher
            .get::<GetAccountProducts>(token, &[(ACCOUNT_ID, account_id.to_string())])
            .await
    }

    /// Insurer by slug.
    ///
    /// Calls `GET {api}/v1/investment_account_providers/{provider}`.
    pub async fn provider(
        &self,
        token: &BearerToken,
        provider: &str,
    ) -> Result<InvestmentAccountProvider, MppApiError> {
        self.dispatcher
            .get::<GetInvestmentAccountProvider>(token, &[("provider", provider.to_string())])
            .await
    }
}
