//! Password-grant login against the SSO realm.

use mpp_schema::auth::{Login, TokenEnvelope, CLIENT_ID, GRANT_TYPE};
use mpp_schema::Endpoint;
use zeroize::Zeroizing;

use crate::credentials::Credentials;
use crate::dispatch::{ApiRequest, Dispatcher};
use crate::error::MppApiError;

/// Client for the SSO facade.
#[derive(Debug, Clone)]
pub struct AuthClient {
    dispatcher: Dispatcher,
}

impl AuthClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Exchange credentials for a token envelope.
    ///
    /// Calls `POST {sso}/auth/realms/mpp-prod/protocol/openid-connect/token`
    /// with a form body. A refused login comes back as
    /// [`MppApiError::Remote`] carrying the OAuth error.
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenEnvelope, MppApiError> {
        let request = ApiRequest::for_endpoint(Login::DESCRIPTOR, &[])?.form(login_form(credentials));
        self.dispatcher.call::<Login>(request).await
    }
}

fn login_form(credentials: &Credentials) -> Zeroizing<String> {
    Zeroizing::new(
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", GRANT_TYPE)
            .append_pair("client_id", CLIENT_ID)
            .append_pair("username", credentials.username())
            .append_pair("password", credentials.password())
            .finish(),
    )
}
