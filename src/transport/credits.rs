use super::codes;
use super::form::{FormParams, push, push_account, push_credentials};
use super::scan;
use crate::domain::{AccountProfile, CreditCount, GatewayError};

pub fn encode_add_credits_form(profile: &AccountProfile, count: CreditCount) -> FormParams {
    let mut params = FormParams::new();
    push_credentials(&mut params, profile);
    push(&mut params, CreditCount::FIELD, &count.value().to_string());
    params
}

/// Any body without a known failure token counts as success.
pub fn decode_add_credits_response(body: &str) -> Result<(), GatewayError> {
    match codes::CREDIT_SUBSCRIBE.classify(body) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn encode_credit_balance_form(profile: &AccountProfile) -> FormParams {
    let mut params = FormParams::new();
    push_account(&mut params, profile, false);
    params
}

pub fn decode_credit_balance_response(body: &str) -> Result<u64, GatewayError> {
    if let Some(err) = codes::CREDIT_BALANCE.classify(body) {
        return Err(err);
    }
    scan::whole_number(body).ok_or_else(|| GatewayError::malformed(body))
}
