//! Endpoints served by the public marketing site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::endpoint::{Endpoint, EndpointDescriptor, Facade, HttpMethod};
use crate::required;
use crate::shape::Shape;

/// Profiles whose history the site publishes.
pub const PUBLIC_PROFILES: [&str; 4] = ["volontaire", "energique", "ambitieux", "intrepide"];

pub const INVEST_PROFILE_HISTORY_INPUT: Shape =
    Shape::StrictObject(&[required!("profile", Shape::String)]);

pub const INVEST_PROFILE_HISTORY_OUTPUT: Shape =
    Shape::Object(&[required!("history", Shape::Record(&Shape::Number))]);

pub const INVEST_PROFILE_HISTORY: EndpointDescriptor = EndpointDescriptor {
    name: "invest_profile_history",
    method: HttpMethod::Post,
    path: "invest-profile/history/{profile}",
    facade: Facade::Public,
    authenticated: false,
    input: &INVEST_PROFILE_HISTORY_INPUT,
    output: &INVEST_PROFILE_HISTORY_OUTPUT,
};

/// Portfolio value per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestProfileHistory {
    pub history: BTreeMap<String, f64>,
}

pub struct GetInvestProfileHistory;

impl Endpoint for GetInvestProfileHistory {
    type Output = InvestProfileHistory;
    const DESCRIPTOR: &'static EndpointDescriptor = &INVEST_PROFILE_HISTORY;
}
