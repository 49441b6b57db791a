//! Coupons: the ones a user holds, and the ones a user sponsors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::hydra::{collection_shape, HydraCollection};
use crate::shape::Shape;
use crate::v1::TOKEN_AND_USER_ID;
use crate::{optional, required};

pub const COUPON_CATEGORY: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("slug", Shape::String),
    required!("name", Shape::String),
    required!("uuid", Shape::String),
]);

pub const HELD_COUPON: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("code", Shape::String),
    required!("enabled", Shape::Boolean),
    required!("subscriptionFree", Shape::Boolean),
    required!("discountAmount", Shape::Number),
    required!("sponsorshipFactor", Shape::Number),
    optional!("discountTimeInSeconds", Shape::Unknown),
    required!("sponsor", Shape::String),
    required!("couponCategory", COUPON_CATEGORY),
    required!(
        "translations",
        Shape::Object(&[required!("fr", Shape::Array(&Shape::Unknown))])
    ),
    required!("name", Shape::String),
    required!("description", Shape::String),
    required!("slug", Shape::String),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const USER_COUPON: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    optional!("subscriptionOfferedAt", Shape::Unknown),
    optional!("discountUsedAt", Shape::Unknown),
    optional!("lastNotificationAt", Shape::Unknown),
    optional!("discountEndsAt", Shape::Unknown),
    required!("reminderEndDiscountSent", Shape::Boolean),
    required!("coupon", HELD_COUPON),
    optional!("order", Shape::Unknown),
    required!("user", Shape::String),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
    required!("notifiable", Shape::Boolean),
    required!("completed", Shape::Boolean),
]);

pub const USER_COUPONS_OUTPUT: Shape = collection_shape!(USER_COUPON);

pub const SPONSOR: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::Integer),
    required!("username", Shape::String),
    required!("email", Shape::String),
    required!("firstname", Shape::String),
    required!("lastname", Shape::String),
    required!("gender", Shape::String),
    required!("validatedAt", Shape::String),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const COUPON: Shape = Shape::Object(&[
    required!("@id", Shape::String),
    required!("@type", Shape::String),
    required!("id", Shape::String),
    required!("code", Shape::String),
    required!("enabled", Shape::Boolean),
    required!("subscriptionFree", Shape::Boolean),
    required!("discountAmount", Shape::Number),
    required!("sponsorshipFactor", Shape::Number),
    required!("userCoupons", Shape::Array(&Shape::Unknown)),
    required!("sponsor", SPONSOR),
    required!("couponCategory", COUPON_CATEGORY),
    required!("uuid", Shape::String),
    required!("createdAt", Shape::String),
    required!("updatedAt", Shape::String),
]);

pub const COUPONS_OUTPUT: Shape = collection_shape!(COUPON);

pub const USER_COUPONS: EndpointDescriptor = EndpointDescriptor {
    name: "user_coupons",
    method: HttpMethod::Get,
    path: "v1/users/{userId}/user_coupons",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_USER_ID,
    output: &USER_COUPONS_OUTPUT,
};

pub const COUPONS: EndpointDescriptor = EndpointDescriptor {
    name: "coupons",
    method: HttpMethod::Get,
    path: "v1/users/{userId}/coupons",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_AND_USER_ID,
    output: &COUPONS_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponCategory {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub slug: String,
    pub name: String,
    pub uuid: String,
}

/// A coupon attached to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCoupon {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub subscription_offered_at: Value,
    #[serde(default)]
    pub discount_used_at: Value,
    #[serde(default)]
    pub last_notification_at: Value,
    #[serde(default)]
    pub discount_ends_at: Value,
    pub reminder_end_discount_sent: bool,
    pub coupon: HeldCoupon,
    #[serde(default)]
    pub order: Value,
    pub user: String,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
    pub notifiable: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeldCoupon {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub code: String,
    pub enabled: bool,
    pub subscription_free: bool,
    pub discount_amount: f64,
    pub sponsorship_factor: f64,
    #[serde(default)]
    pub discount_time_in_seconds: Value,
    /// IRI of the sponsoring user.
    pub sponsor: String,
    pub coupon_category: CouponCategory,
    pub translations: CouponTranslations,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponTranslations {
    pub fr: Vec<Value>,
}

pub type UserCoupons = HydraCollection<UserCoupon>;

/// A coupon the user sponsors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: String,
    pub code: String,
    pub enabled: bool,
    pub subscription_free: bool,
    pub discount_amount: f64,
    pub sponsorship_factor: f64,
    pub user_coupons: Vec<Value>,
    pub sponsor: Sponsor,
    pub coupon_category: CouponCategory,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "@type")]
    pub resource_type: String,
    pub id: i64,
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub gender: String,
    pub validated_at: String,
    pub uuid: String,
    pub created_at: String,
    pub updated_at: String,
}

pub type Coupons = HydraCollection<Coupon>;

pub struct GetUserCoupons;

impl Endpoint for GetUserCoupons {
    type Output = UserCoupons;
    const DESCRIPTOR: &'static EndpointDescriptor = &USER_COUPONS;
}

pub struct GetCoupons;

impl Endpoint for GetCoupons {
    type Output = Coupons;
    const DESCRIPTOR: &'static EndpointDescriptor = &COUPONS;
}
