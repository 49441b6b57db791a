//! `v1/settings/*.json`: front-end settings exposed as key/value documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::required;
use crate::shape::Shape;
use crate::v1::TOKEN_ONLY;

pub const TWITCH_OUTPUT: Shape = Shape::Object(&[
    required!("key", Shape::String),
    required!("readable", Shape::Boolean),
    required!(
        "value",
        Shape::Object(&[required!("isLive", Shape::Boolean)])
    ),
]);

/// The video setting's value has no fixed structure.
pub const ADVICE_WAITING_VIDEO_OUTPUT: Shape = Shape::Object(&[
    required!("key", Shape::String),
    required!("readable", Shape::Boolean),
    required!("value", Shape::Unknown),
]);

pub const TWITCH: EndpointDescriptor = EndpointDescriptor {
    name: "twitch",
    method: HttpMethod::Get,
    path: "v1/settings/twitch.json",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_ONLY,
    output: &TWITCH_OUTPUT,
};

pub const ADVICE_WAITING_VIDEO: EndpointDescriptor = EndpointDescriptor {
    name: "advice_waiting_video",
    method: HttpMethod::Get,
    path: "v1/settings/advice-waiting-video.json",
    facade: Facade::Api,
    authenticated: true,
    input: &TOKEN_ONLY,
    output: &ADVICE_WAITING_VIDEO_OUTPUT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting<V> {
    pub key: String,
    pub readable: bool,
    pub value: V,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitchStatus {
    pub is_live: bool,
}

pub type TwitchSetting = Setting<TwitchStatus>;

pub type AdviceWaitingVideoSetting = Setting<Value>;

pub struct GetTwitch;

impl Endpoint for GetTwitch {
    type Output = TwitchSetting;
    const DESCRIPTOR: &'static EndpointDescriptor = &TWITCH;
}

pub struct GetAdviceWaitingVideo;

impl Endpoint for GetAdviceWaitingVideo {
    type Output = AdviceWaitingVideoSetting;
    const DESCRIPTOR: &'static EndpointDescriptor = &ADVICE_WAITING_VIDEO;
}
