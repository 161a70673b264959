use super::codes;
use super::form::{FormParams, push, push_account};
use super::scan;
use crate::domain::{
    AccountProfile, DeleteService, ErrorKind, GatewayError, HelpMessage, Keyword, KeywordAction,
    KeywordRegistration, ProcessorUrl, ServiceId, ServiceName, ShortCode, StopMessage,
};

/// Status token the gateway uses for "no error".
const NO_ERROR: &str = "Err:0";
const SERVICE_ID_MARKER: &str = "SERVICEID:";

pub fn encode_keyword_check_form(profile: &AccountProfile, keyword: &Keyword) -> FormParams {
    let mut params = FormParams::new();
    push_account(&mut params, profile, false);
    push(&mut params, ShortCode::FIELD, profile.short_code().as_str());
    push(&mut params, Keyword::FIELD, keyword.as_str());
    params
}

/// `true` only when the body carries the no-error token. Any other body means
/// the keyword is unavailable; only authentication failures are errors.
pub fn decode_keyword_check_response(body: &str) -> Result<bool, GatewayError> {
    if let Some(err) = codes::KEYWORD_CHECK.classify(body) {
        return Err(err);
    }
    Ok(body.match_indices(NO_ERROR).any(|(idx, token)| {
        !body[idx + token.len()..].starts_with(|c: char| c.is_ascii_digit())
    }))
}

pub fn encode_register_keyword_form(
    profile: &AccountProfile,
    registration: &KeywordRegistration,
) -> FormParams {
    let short_code = registration
        .short_code
        .as_ref()
        .unwrap_or_else(|| profile.short_code());

    let mut params = FormParams::new();
    push_account(&mut params, profile, true);
    push(&mut params, ShortCode::FIELD, short_code.as_str());
    push(
        &mut params,
        ServiceName::FIELD,
        registration.service_name.as_str(),
    );
    push(&mut params, Keyword::FIELD, registration.keyword.as_str());
    push(
        &mut params,
        ProcessorUrl::FIELD,
        registration.processor_url.as_str(),
    );
    push(
        &mut params,
        HelpMessage::FIELD,
        registration.help_message.as_str(),
    );
    push(
        &mut params,
        StopMessage::FIELD,
        registration.stop_message.as_str(),
    );
    push(
        &mut params,
        KeywordAction::FIELD,
        registration.action().as_str(),
    );
    params
}

pub fn decode_register_keyword_response(body: &str) -> Result<ServiceId, GatewayError> {
    if let Some(err) = codes::KEYWORD_REGISTER.classify(body) {
        return Err(err);
    }
    scan::digits_after(body, SERVICE_ID_MARKER)
        .and_then(|digits| digits.parse::<u64>().ok())
        .and_then(|id| ServiceId::new(id).ok())
        .ok_or_else(|| GatewayError::malformed(body))
}

/// Same endpoint as registration, without `PROFILEID`.
pub fn encode_delete_service_form(profile: &AccountProfile, request: &DeleteService) -> FormParams {
    let mut params = FormParams::new();
    push_account(&mut params, profile, false);
    push(&mut params, ShortCode::FIELD, request.short_code.as_str());
    push(
        &mut params,
        ServiceId::FIELD,
        &request.service_id.value().to_string(),
    );
    push(&mut params, Keyword::FIELD, request.keyword.as_str());
    push(&mut params, KeywordAction::FIELD, request.action().as_str());
    params
}

/// The gateway acknowledges a delete by echoing `SERVICEID`; nothing else is success.
pub fn decode_delete_service_response(body: &str) -> Result<(), GatewayError> {
    if let Some(err) = codes::KEYWORD_DELETE.classify(body) {
        return Err(err);
    }
    if body.trim_start().starts_with("SERVICEID") {
        return Ok(());
    }
    Err(GatewayError::new(
        ErrorKind::RemoteRejected,
        codes::leading_status_code(body),
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::super::form::test_profile;
    use super::*;

    fn registration() -> KeywordRegistration {
        KeywordRegistration {
            service_name: ServiceName::new("Test service name").unwrap(),
            keyword: Keyword::new("test_keyword").unwrap(),
            processor_url: ProcessorUrl::new("http://example.com/processor").unwrap(),
            help_message: HelpMessage::new("help message").unwrap(),
            stop_message: StopMessage::new("stop message").unwrap(),
            short_code: None,
        }
    }

    #[test]
    fn encode_keyword_check_routes_on_profile_short_code() {
        let params = encode_keyword_check_form(&test_profile(), &Keyword::new("pizza").unwrap());
        assert_eq!(
            params,
            vec![
                ("USERID".to_owned(), "acme".to_owned()),
                ("PASSWORD".to_owned(), "secret".to_owned()),
                ("VASID".to_owned(), "12345".to_owned()),
                ("SHORTCODEID".to_owned(), "27126".to_owned()),
                ("KEYWORD".to_owned(), "pizza".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_keyword_check_reads_no_error_token() {
        assert!(decode_keyword_check_response("Err:0: keyword available").unwrap());
        assert!(decode_keyword_check_response("Err:0").unwrap());
        assert!(!decode_keyword_check_response("Err:705: keyword taken").unwrap());
        assert!(!decode_keyword_check_response("Err:01").unwrap());
        assert!(!decode_keyword_check_response("<html>maintenance</html>").unwrap());

        let err = decode_keyword_check_response("Err:300").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    }

    #[test]
    fn encode_register_includes_profile_id_and_add_action() {
        let params = encode_register_keyword_form(&test_profile(), &registration());
        assert_eq!(
            params,
            vec![
                ("USERID".to_owned(), "acme".to_owned()),
                ("PASSWORD".to_owned(), "secret".to_owned()),
                ("VASID".to_owned(), "12345".to_owned()),
                ("PROFILEID".to_owned(), "42".to_owned()),
                ("SHORTCODEID".to_owned(), "27126".to_owned()),
                ("SERVICENAME".to_owned(), "Test service name".to_owned()),
                ("KEYWORD".to_owned(), "test_keyword".to_owned()),
                (
                    "PROCESSORURL".to_owned(),
                    "http://example.com/processor".to_owned()
                ),
                ("HELPMSG".to_owned(), "help message".to_owned()),
                ("STOPMSG".to_owned(), "stop message".to_owned()),
                ("ACTION".to_owned(), "ADD".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_register_prefers_explicit_short_code() {
        let mut registration = registration();
        registration.short_code = Some(ShortCode::new("30303").unwrap());
        let params = encode_register_keyword_form(&test_profile(), &registration);
        assert!(params.contains(&("SHORTCODEID".to_owned(), "30303".to_owned())));
    }

    #[test]
    fn encode_register_sends_processor_url_verbatim() {
        let mut registration = registration();
        registration.processor_url = ProcessorUrl::new("http://example.com/cb?x=a b").unwrap();
        let params = encode_register_keyword_form(&test_profile(), &registration);
        assert!(params.contains(&(
            "PROCESSORURL".to_owned(),
            "http://example.com/cb?x=a b".to_owned()
        )));
    }

    #[test]
    fn decode_register_extracts_service_id() {
        let id = decode_register_keyword_response("SERVICEID:4432").unwrap();
        assert_eq!(id.value(), 4432);

        let err = decode_register_keyword_response("Err:705: keyword taken").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeywordTaken);

        let err = decode_register_keyword_response("Err:712").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OperationNotPermitted);

        let err = decode_register_keyword_response("Err:702: missing keyword").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);

        let err = decode_register_keyword_response("registered").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let err = decode_register_keyword_response("SERVICEID:0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn encode_delete_omits_profile_id() {
        let request = DeleteService::new(
            ShortCode::new("27126").unwrap(),
            ServiceId::new(4432).unwrap(),
            Keyword::new("test_keyword").unwrap(),
        );
        let params = encode_delete_service_form(&test_profile(), &request);
        assert_eq!(
            params,
            vec![
                ("USERID".to_owned(), "acme".to_owned()),
                ("PASSWORD".to_owned(), "secret".to_owned()),
                ("VASID".to_owned(), "12345".to_owned()),
                ("SHORTCODEID".to_owned(), "27126".to_owned()),
                ("SERVICEID".to_owned(), "4432".to_owned()),
                ("KEYWORD".to_owned(), "test_keyword".to_owned()),
                ("ACTION".to_owned(), "DELETE".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_delete_requires_service_id_echo() {
        assert!(decode_delete_service_response("SERVICEID:4432").is_ok());

        let err = decode_delete_service_response("Err:712").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OperationNotPermitted);

        let err = decode_delete_service_response("Err:719: no such service").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteRejected);
        assert_eq!(err.code(), Some(719));
        assert_eq!(err.raw(), "Err:719: no such service");

        let err = decode_delete_service_response("deleted").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteRejected);
        assert_eq!(err.code(), None);
    }
}
