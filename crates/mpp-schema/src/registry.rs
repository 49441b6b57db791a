//! Every endpoint the client knows, in one table.

use crate::endpoint::EndpointDescriptor;
use crate::v1::{accounts, advice, coupons, invest_profiles, kyc, me, settings};
use crate::{auth, public};

/// All endpoint descriptors.
pub static ENDPOINTS: &[&EndpointDescriptor] = &[
    &auth::LOGIN,
    &me::ME,
    &settings::TWITCH,
    &settings::ADVICE_WAITING_VIDEO,
    &kyc::USER_KYCS,
    &coupons::USER_COUPONS,
    &coupons::COUPONS,
    &advice::ADVICE,
    &advice::ADVICE_DTO,
    &invest_profiles::INVEST_PROFILE_CATEGORIES,
    &invest_profiles::INVEST_PROFILES,
    &accounts::ACCOUNT,
    &accounts::FINANCIAL_CAPITAL,
    &accounts::INVESTMENT_VALUES,
    &accounts::ACCOUNT_PRODUCTS,
    &accounts::PROVIDER,
    &kyc::KYC_CATEGORIES,
    &kyc::KYC_QUESTIONS,
    &kyc::AVAILABLE_PRODUCTS,
    &kyc::INITIAL_CONSULTING_ANALYSIS,
    &kyc::MONTHLY_CONSULTING_ANALYSIS,
    &public::INVEST_PROFILE_HISTORY,
];

/// Look up a descriptor by name.
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS.iter().copied().find(|e| e.name == name)
}
