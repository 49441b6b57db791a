//! Site-wide settings documents.

use mpp_schema::v1::settings::{
    AdviceWaitingVideoSetting, GetAdviceWaitingVideo, GetTwitch, TwitchSetting,
};

use crate::credentials::BearerToken;
use crate::dispatch::Dispatcher;
use crate::error::MppApiError;

#[derive(Debug, Clone)]
pub struct SettingsClient {
    dispatcher: Dispatcher,
}

impl SettingsClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Whether the Twitch channel is live.
    ///
    /// Calls `GET {api}/v1/settings/twitch.json`.
    pub async fn twitch(&self, token: &BearerToken) -> Result<TwitchSetting, MppApiError> {
        self.dispatcher.get::<GetTwitch>(token, &[]).await
    }

    /// Calls `GET {api}/v1/settings/advice-waiting-video.json`.
    pub async fn advice_waiting_video(
        &self,
        token: &BearerToken,
    ) -> Result<AdviceWaitingVideoSetting, MppApiError> {
        self.dispatcher.get::<GetAdviceWaitingVideo>(token, &[]).await
    }
}
