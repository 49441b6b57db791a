//! Anonymous endpoints of the public site.

use mpp_schema::public::{GetInvestProfileHistory, InvestProfileHistory};
use mpp_schema::Endpoint;
use reqwest::header::{HeaderName, ACCEPT};
use serde_json::Value;

use crate::dispatch::{ApiRequest, Dispatcher};
use crate::error::MppApiError;

#[derive(Debug, Clone)]
pub struct PublicClient {
    dispatcher: Dispatcher,
}

impl PublicClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Historical performance of a public profile
    /// (`volontaire`, `energique`, `ambitieux`, `intrepide`).
    ///
    /// Calls `POST {public}/invest-profile/history/{profile}` with a JSON
    /// `null` body, the way the site's own front end does.
    pub async fn invest_profile_history(
        &self,
        profile: &str,
    ) -> Result<InvestProfileHistory, MppApiError> {
        let request = ApiRequest::for_endpoint(
            GetInvestProfileHistory::DESCRIPTOR,
            &[("profile", profile.to_string())],
        )?
        .header(ACCEPT, "application/json, text/plain, */*")
        .header(HeaderName::from_static("x-requested-with"), "XMLHttpRequest")
        .json(Value::Null);
        self.dispatcher.call::<GetInvestProfileHistory>(request).await
    }
}
