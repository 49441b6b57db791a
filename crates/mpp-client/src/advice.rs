//! Investment advice.

use mpp_schema::v1::advice::{Advice, AdviceDto, GetAdvice, GetAdviceDto};

use crate::credentials::BearerToken;
use crate::dispatch::Dispatcher;
use crate::error::MppApiError;

#[derive(Debug, Clone)]
pub struct AdviceClient {
    dispatcher: Dispatcher,
}

impl AdviceClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Calls `GET {api}/v1/advice/{adviceId}`.
    pub async fn advice(&self, token: &BearerToken, advice_id: i64) -> Result<Advice, MppApiError> {
        self.dispatcher
            .get::<GetAdvice>(token, &[("adviceId", advice_id.to_string())])
            .await
    }

    /// Current advice of an investment account, with its allocation.
    ///
    /// Calls `GET {api}/v1/user_investment_accounts/{id}/advice_dto`.
    pub async fn advice_dto(
        &self,
        token: &BearerToken,
        account_id: i64,
    ) -> Result<AdviceDto, MppApiError> {
        self.dispatcher
            .get::<GetAdviceDto>(
                token,
                &[("userInvestmentAccountId", account_id.to_string())],
            )
            .await
    }
}
