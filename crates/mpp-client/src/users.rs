//! The logged-in user and the records hanging off their id.

use mpp_schema::v1::coupons::{Coupons, GetCoupons, GetUserCoupons, UserCoupons};
use mpp_schema::v1::kyc::{GetUserKycs, UserKycs};
use mpp_schema::v1::me::{GetMe, Me};

use crate::credentials::BearerToken;
use crate::dispatch::Dispatcher;
use crate::error::MppApiError;

#[derive(Debug, Clone)]
pub struct UsersClient {
    dispatcher: Dispatcher,
}

impl UsersClient {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Profile of the token's owner.
    ///
    /// Calls `GET {api}/v1/me`.
    pub async fn me(&self, token: &BearerToken) -> Result<Me, MppApiError> {
        self.dispatcher.get::<GetMe>(token, &[]).await
    }

    /// Calls `GET {api}/v1/users/{userId}/user_kycs`.
    pub async fn kycs(&self, token: &BearerToken, user_id: i64) -> Result<UserKycs, MppApiError> {
        self.dispatcher
            .get::<GetUserKycs>(token, &[("userId", user_id.to_string())])
            .await
    }

    /// Coupons the user holds.
    ///
    /// Calls `GET {api}/v1/users/{userId}/user_coupons`.
    pub async fn user_coupons(
        &self,
        token: &BearerToken,
        user_id: i64,
    ) -> Result<UserCoupons, MppApiError> {
        self.dispatcher
            .get::<GetUserCoupons>(token, &[("userId", user_id.to_string())])
            .await
    }

    /// Coupons offered to the user.
    ///
    /// Calls `GET {api}/v1/users/{userId}/coupons`.
    pub async fn coupons(&self, token: &BearerToken, user_id: i64) -> Result<Coupons, MppApiError> {
        self.dispatcher
            .get::<GetCoupons>(token, &[("userId", user_id.to_string())])
            .await
    }
}
