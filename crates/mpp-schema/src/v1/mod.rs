//! Authenticated endpoints of the main API (`v1/...`).
//!
//! Every endpoint here takes a bearer `token` plus its path parameters;
//! the input shapes below list exactly those.

pub mod accounts;
pub mod advice;
pub mod coupons;
pub mod invest_profiles;
pub mod kyc;
pub mod me;
pub mod settings;

use crate::required;
use crate::shape::Shape;

pub const TOKEN_ONLY: Shape = Shape::StrictObject(&[required!("token", Shape::String)]);

pub const TOKEN_AND_USER_ID: Shape = Shape::StrictObject(&[
    required!("token", Shape::String),
    required!("userId", Shape::Integer),
]);

pub const TOKEN_AND_ADVICE_ID: Shape = Shape::StrictObject(&[
    required!("token", Shape::String),
    required!("adviceId", Shape::Integer),
]);

pub const TOKEN_AND_ACCOUNT_ID: Shape = Shape::StrictObject(&[
    required!("token", Shape::String),
    required!("userInvestmentAccountId", Shape::Integer),
]);

/// The single-account lookup takes the id as the backend renders it.
pub const TOKEN_AND_ACCOUNT_REF: Shape = Shape::StrictObject(&[
    required!("token", Shape::String),
    required!("userInvestmentAccountId", Shape::String),
]);

pub const TOKEN_AND_PROVIDER: Shape = Shape::StrictObject(&[
    required!("token", Shape::String),
    required!("provider", Shape::String),
]);

pub const TOKEN_AND_KYC_ID: Shape = Shape::StrictObject(&[
    required!("token", Shape::String),
    required!("userKycsId", Shape::Integer),
]);
