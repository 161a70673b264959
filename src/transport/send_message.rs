use super::codes;
use super::form::{FormParams, push, push_account};
use super::scan;
use crate::domain::{
    AccountProfile, BatchId, BatchName, GatewayError, JobId, MessageText, MobileNumber,
    NetworkId, SendMessage, SendResult, SendTarget, ShortCode,
};

/// Protocol version the send endpoint is spoken at.
const VERSION: &str = "2.0";

pub fn encode_send_message_form(profile: &AccountProfile, request: &SendMessage) -> FormParams {
    let mut params = FormParams::new();
    push_account(&mut params, profile, true);
    push(&mut params, "VERSION", VERSION);

    let from = request
        .options()
        .from
        .as_ref()
        .unwrap_or_else(|| profile.short_code());
    push(&mut params, ShortCode::FROM_FIELD, from.as_str());
    push(&mut params, MessageText::FIELD, request.text().as_str());

    if let Some(network_id) = request.options().network_id.as_ref() {
        push(&mut params, NetworkId::FIELD, network_id.as_str());
    }

    match request.target() {
        SendTarget::Single(number) => {
            push(&mut params, MobileNumber::FIELD, number.as_str());
        }
        SendTarget::Batch(batch) => {
            let to = batch
                .recipients()
                .iter()
                .map(MobileNumber::as_str)
                .collect::<Vec<_>>()
                .join(",");
            push(&mut params, MobileNumber::FIELD, &to);
            push(&mut params, BatchName::FIELD, batch.name().as_str());
        }
    }

    params
}

/// Decode a send response. The expected shape follows the submitted target, not
/// the body: a batch body answering a single send is malformed.
pub fn decode_send_message_response(
    target: &SendTarget,
    body: &str,
) -> Result<SendResult, GatewayError> {
    if let Some(err) = codes::SEND.classify(body) {
        return Err(err);
    }

    match target {
        SendTarget::Single(_) => {
            let (mobile, job) =
                scan::job_pair(body).ok_or_else(|| GatewayError::malformed(body))?;
            Ok(SendResult::Single {
                mobile_number: MobileNumber::new(mobile)
                    .map_err(|_| GatewayError::malformed(body))?,
                job_id: JobId::new(job).map_err(|_| GatewayError::malformed(body))?,
            })
        }
        SendTarget::Batch(_) => {
            let digits =
                scan::digits_after(body, "BATCHID:").ok_or_else(|| GatewayError::malformed(body))?;
            Ok(SendResult::Batch {
                batch_id: BatchId::new(digits).map_err(|_| GatewayError::malformed(body))?,
            })
        }
    }
}
