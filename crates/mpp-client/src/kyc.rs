//! Know-your-customer questionnaires and what they unlock.

use mpp_schema::v1::kyc::{
    AvailableProducts, ConsultingAnalysis, GetAvailableProducts, GetInitialConsultingAnalysis,
    GetKycCategories, GetKycQuestions, GetMonthlyConsultingAnalysis, KycCategories, KycQuestions,
};

use crate::credentials::BearerToken;
use crate::dispatch::Dispatcher;
use crate::error::MppApiError;

const KYC_ID: &str = "userKycsId";

#[derive(Debug, Clone)]
pub struct KycClient {
    dispatcher: Dispatcher,
}

impl KycClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Calls `GET {api}/v1/kyc_categories`.
    pub async fn categories(&self, token: &BearerToken) -> Result<KycCategories, MppApiError> {
        self.dispatcher.get::<GetKycCategories>(token, &[]).await
    }

    /// Questionnaire of one insurer.
    ///
    /// Calls `GET {api}/v1/investment_account_providers/{provider}/kyc_questions`.
    pub async fn questions(
        &self,
        token: &BearerToken,
        provider: &str,
    ) -> Result<KycQuestions, MppApiError> {
        self.dispatcher
            .get::<GetKycQuestions>(token, &[("provider", provider.to_string())])
            .await
    }

    /// Calls `GET {api}/v1/user_kycs/{userKycsId}/available_products`.
    pub async fn available_products(
        &self,
        token: &BearerToken,
        kyc_id: i64,
    ) -> Result<AvailableProducts, MppApiError> {
        self.dispatcher
            .get::<GetAvailableProducts>(token, &[(KYC_ID, kyc_id.to_string())])
            .await
    }

    /// Calls `GET {api}/v1/user_kycs/{userKycsId}/consulting_analysis/initial`.
    pub async fn initial_consulting_analysis(
        &self,
        token: &BearerToken,
        kyc_id: i64,
    ) -> Result<ConsultingAnalysis, MppApiError> {
        self.dispatcher
            .get::<GetInitialConsultingAnalysis>(token, &[(KYC_ID, kyc_id.to_string())])
            .await
    }

    /// Calls `GET {api}/v1/user_kycs/{userKycsId}/consulting_analysis/monthly`.
    pub async fn monthly_consulting_analysis(
        &self,
        token: &BearerToken,
        kyc_id: i64,
    ) -> Result<ConsultingAnalysis, MppApiError> {
        self.dispatcher
            .get::<GetMonthlyConsultingAnalysis>(token, &[(KYC_ID, kyc_id.to_string())])
            .await
    }
}
