//! Investment profiles and their categories.

use mpp_schema::v1::invest_profiles::{
    GetInvestProfileCategories, GetInvestProfiles, InvestProfileCategories, InvestProfiles,
};

use crate::credentials::BearerToken;
use crate::dispatch::Dispatcher;
use crate::error::MppApiError;

#[derive(Debug, Clone)]
pub struct InvestProfilesClient {
    dispatcher: Dispatcher,
}

impl InvestProfilesClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Calls `GET {api}/v1/invest_profile_categories`.
    pub async fn categories(
        &self,
        token: &BearerToken,
    ) -> Result<InvestProfileCategories, MppApiError> {
        self.dispatcher
            .get::<GetInvestProfileCategories>(token, &[])
            .await
    }

    /// Calls `GET {api}/v1/invest_profiles`.
    pub async fn profiles(&self, token: &BearerToken) -> Result<InvestProfiles, MppApiError> {
        self.dispatcher.get::<GetInvestProfiles>(token, &[]).await
    }
}
