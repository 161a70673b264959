use crate::domain::validation::ValidationError;

use phonenumber::country;

fn trimmed_non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn trimmed_digits(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = trimmed_non_empty(field, value)?;
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotDigits {
            field,
            input: trimmed,
        });
    }
    Ok(trimmed)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway account user name (`USERID`).
///
/// Invariant: non-empty after trimming.
pub struct UserId(String);

impl UserId {
    /// Form field name used by the gateway (`USERID`).
    pub const FIELD: &'static str = "USERID";

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Gateway account password (`PASSWORD`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by the gateway (`PASSWORD`).
    pub const FIELD: &'static str = "PASSWORD";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Profile identifier (`PROFILEID`) sent on sends and keyword registration.
///
/// Invariant: non-empty after trimming.
pub struct ProfileId(String);

impl ProfileId {
    /// Form field name used by the gateway (`PROFILEID`).
    pub const FIELD: &'static str = "PROFILEID";

    /// Create a validated [`ProfileId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated profile id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account-level value-added-service identifier (`VASID`).
///
/// Invariant: non-empty after trimming.
pub struct VasId(String);

impl VasId {
    /// Form field name used by the gateway (`VASID`).
    pub const FIELD: &'static str = "VASID";

    /// Create a validated [`VasId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated vasid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Short code: the originating number of outbound messages and the routing key
/// for inbound keyword services.
///
/// Invariant: non-empty after trimming.
pub struct ShortCode(String);

impl ShortCode {
    /// Form field name used when the short code identifies a keyword route (`SHORTCODEID`).
    pub const FIELD: &'static str = "SHORTCODEID";
    /// Form field name used when the short code originates a message (`FROM`).
    pub const FROM_FIELD: &'static str = "FROM";

    /// Create a validated [`ShortCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated short code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination mobile number as sent to the gateway (`TO`): country code followed
/// by the subscriber number, e.g. `17321234567`.
///
/// Invariant: non-empty and decimal digits only after trimming. Use [`PhoneNumber`]
/// when the input needs normalization first.
pub struct MobileNumber(String);

impl MobileNumber {
    /// Form field name used by the gateway (`TO`).
    pub const FIELD: &'static str = "TO";

    /// Create a validated mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_digits(Self::FIELD, value.into())?))
    }

    /// Digits as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for MobileNumber {
    /// The gateway takes the E.164 form without its leading `+`.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164.trim_start_matches('+').to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let raw = trimmed_non_empty(MobileNumber::FIELD, input.into())?;

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`TEXT`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by the gateway (`TEXT`).
    pub const FIELD: &'static str = "TEXT";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Destination network id (`NETWORKID`), as reported by the gateway on inbound messages.
pub struct NetworkId(String);

impl NetworkId {
    /// Form field name used by the gateway (`NETWORKID`).
    pub const FIELD: &'static str = "NETWORKID";

    /// Create a validated [`NetworkId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated network id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Reference label identifying a batch send in gateway reports (`BATCHNAME`).
pub struct BatchName(String);

impl BatchName {
    /// Form field name used by the gateway (`BATCHNAME`).
    pub const FIELD: &'static str = "BATCHNAME";

    /// Label used when a batch is sent without one.
    pub const DEFAULT: &'static str = "batched send";

    /// Create a validated [`BatchName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BatchName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Display name of a keyword service (`SERVICENAME`).
pub struct ServiceName(String);

impl ServiceName {
    /// Form field name used by the gateway (`SERVICENAME`).
    pub const FIELD: &'static str = "SERVICENAME";

    /// Create a validated [`ServiceName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated service name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Inbound keyword (`KEYWORD`).
///
/// Invariant: non-empty after trimming.
pub struct Keyword(String);

impl Keyword {
    /// Form field name used by the gateway (`KEYWORD`).
    pub const FIELD: &'static str = "KEYWORD";

    /// Create a validated [`Keyword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_non_empty(Self::FIELD, value.into())?))
    }

    /// Borrow the validated keyword.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL the gateway forwards inbound keyword messages to (`PROCESSORURL`).
///
/// Invariant: absolute `http` or `https` URL.
pub struct ProcessorUrl(String);

impl ProcessorUrl {
    /// Form field name used by the gateway (`PROCESSORURL`).
    pub const FIELD: &'static str = "PROCESSORURL";

    /// Validate a processor URL. The trimmed input is kept as given; parsing
    /// only checks it.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = trimmed_non_empty(Self::FIELD, value.into())?;
        let is_http = url::Url::parse(&raw)
            .map(|parsed| matches!(parsed.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !is_http {
            return Err(ValidationError::InvalidUrl {
                field: Self::FIELD,
                input: raw,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Auto-reply sent when a subscriber texts `HELP` (`HELPMSG`).
pub struct HelpMessage(String);

impl HelpMessage {
    /// Form field name used by the gateway (`HELPMSG`).
    pub const FIELD: &'static str = "HELPMSG";

    /// Create validated help text. Whitespace is preserved.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Auto-reply sent when a subscriber opts out with `STOP` (`STOPMSG`).
pub struct StopMessage(String);

impl StopMessage {
    /// Form field name used by the gateway (`STOPMSG`).
    pub const FIELD: &'static str = "STOPMSG";

    /// Create validated opt-out text. Whitespace is preserved.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Gateway-assigned id of a registered keyword service (`SERVICEID`).
///
/// Opaque to the gateway's clients: keep it to delete the service later.
/// Invariant: positive.
pub struct ServiceId(u64);

impl ServiceId {
    /// Form field name used by the gateway (`SERVICEID`).
    pub const FIELD: &'static str = "SERVICEID";

    /// Create a validated [`ServiceId`].
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying id.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of keyword credits to purchase (`KEYWORDREDITS`, spelled as the gateway expects).
///
/// Invariant: `>= 1`. Defaults to one credit.
pub struct CreditCount(u32);

impl CreditCount {
    /// Form field name used by the gateway (`KEYWORDREDITS`).
    pub const FIELD: &'static str = "KEYWORDREDITS";

    /// Create a validated credit count.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                actual: 0,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying count.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for CreditCount {
    fn default() -> Self {
        Self(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Gateway-assigned id of a single outbound message.
///
/// Kept as the exact digit string returned by the gateway.
pub struct JobId(String);

impl JobId {
    /// Create a validated job id (decimal digits only).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_digits("JOBID", value.into())?))
    }

    /// Borrow the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Gateway-assigned id of a multi-recipient send.
///
/// Kept as the exact digit string returned by the gateway.
pub struct BatchId(String);

impl BatchId {
    /// Create a validated batch id (decimal digits only).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(trimmed_digits("BATCHID", value.into())?))
    }

    /// Borrow the digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let user = UserId::new(" user ").unwrap();
        assert_eq!(user.as_str(), "user");
        assert!(UserId::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let vasid = VasId::new(" 12345 ").unwrap();
        assert_eq!(vasid.as_str(), "12345");

        let short_code = ShortCode::new(" 27126 ").unwrap();
        assert_eq!(short_code.as_str(), "27126");

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let keyword = Keyword::new(" pizza ").unwrap();
        assert_eq!(keyword.as_str(), "pizza");
        assert!(Keyword::new("").is_err());

        assert!(HelpMessage::new("  ").is_err());
        assert!(StopMessage::new("").is_err());
    }

    #[test]
    fn password_debug_hides_value() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn mobile_number_requires_digits() {
        let number = MobileNumber::new(" 15551234567 ").unwrap();
        assert_eq!(number.as_str(), "15551234567");

        assert!(matches!(
            MobileNumber::new("+15551234567"),
            Err(ValidationError::NotDigits { field: "TO", .. })
        ));
        assert!(matches!(
            MobileNumber::new(""),
            Err(ValidationError::Empty { field: "TO" })
        ));
    }

    #[test]
    fn mobile_number_from_phone_number_drops_plus() {
        let parsed = PhoneNumber::parse(None, "+1 (732) 123-4567").unwrap();
        assert_eq!(parsed.e164(), "+17321234567");
        assert_eq!(parsed.raw(), "+1 (732) 123-4567");

        let number: MobileNumber = parsed.into();
        assert_eq!(number.as_str(), "17321234567");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn processor_url_requires_http_scheme() {
        let url = ProcessorUrl::new("http://example.com/processor").unwrap();
        assert_eq!(url.as_str(), "http://example.com/processor");

        assert!(matches!(
            ProcessorUrl::new("ftp://example.com"),
            Err(ValidationError::InvalidUrl { .. })
        ));
        assert!(matches!(
            ProcessorUrl::new("not a url"),
            Err(ValidationError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn processor_url_is_sent_as_given() {
        let url = ProcessorUrl::new("  http://example.com/cb?x=a b ").unwrap();
        assert_eq!(url.as_str(), "http://example.com/cb?x=a b");
        assert_eq!(
            ProcessorUrl::new("http://example.com").unwrap().as_str(),
            "http://example.com"
        );
        assert_eq!(
            ProcessorUrl::new("HTTPS://Example.com/Hook").unwrap().as_str(),
            "HTTPS://Example.com/Hook"
        );
    }

    #[test]
    fn numeric_values_must_be_positive() {
        assert!(ServiceId::new(0).is_err());
        assert_eq!(ServiceId::new(4432).unwrap().value(), 4432);
        assert_eq!(ServiceId::new(4432).unwrap().to_string(), "4432");

        assert!(CreditCount::new(0).is_err());
        assert_eq!(CreditCount::new(4).unwrap().value(), 4);
        assert_eq!(CreditCount::default().value(), 1);
    }

    #[test]
    fn gateway_ids_keep_exact_digits() {
        assert_eq!(JobId::new("0099881").unwrap().as_str(), "0099881");
        assert_eq!(BatchId::new("77").unwrap().as_str(), "77");
        assert!(JobId::new("12a").is_err());
        assert_eq!(BatchName::default().as_str(), "batched send");
    }
}
