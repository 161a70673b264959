//! Transport layer: form encoding and plain-text response decoding.
//!
//! Decoders never look at HTTP status codes; the gateway reports every outcome,
//! authentication failures included, inside a 200 body.

mod codes;
mod credits;
mod form;
mod keyword;
mod scan;
mod send_message;

pub use credits::{
    decode_add_credits_response, decode_credit_balance_response, encode_add_credits_form,
    encode_credit_balance_form,
};
pub use form::FormParams;
pub use keyword::{
    decode_delete_service_response, decode_keyword_check_response,
    decode_register_keyword_response, encode_delete_service_form, encode_keyword_check_form,
    encode_register_keyword_form,
};
pub use send_message::{decode_send_message_response, encode_send_message_form};
