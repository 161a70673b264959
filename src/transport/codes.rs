//! Per-endpoint tables mapping gateway status tokens to [`ErrorKind`]s.
//!
//! The same numeric code means different things on different endpoints, so
//! every endpoint owns its table. Rules are tried in order and the first match
//! wins; more specific tokens are listed first.

use crate::domain::ErrorKind::{
    AccountUpdateFailed, AuthenticationFailed, InsufficientCredits, InvalidRequest,
    KeywordTaken, OperationNotPermitted, PaymentDeclined,
};
use crate::domain::{ErrorKind, GatewayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Token must open the body (leading whitespace ignored).
    Start,
    /// Token may appear anywhere in the body.
    Anywhere,
}

#[derive(Debug, Clone, Copy)]
pub struct CodeRule {
    token: &'static str,
    anchor: Anchor,
    kind: ErrorKind,
}

impl CodeRule {
    const fn start(token: &'static str, kind: ErrorKind) -> Self {
        Self {
            token,
            anchor: Anchor::Start,
            kind,
        }
    }

    const fn anywhere(token: &'static str, kind: ErrorKind) -> Self {
        Self {
            token,
            anchor: Anchor::Anywhere,
            kind,
        }
    }

    fn matches(&self, body: &str) -> bool {
        match self.anchor {
            Anchor::Start => body.trim_start().starts_with(self.token),
            Anchor::Anywhere => body.contains(self.token),
        }
    }

    fn code(&self) -> Option<u16> {
        trailing_code(self.token)
    }
}

#[derive(Debug)]
pub struct CodeTable {
    pub name: &'static str,
    rules: &'static [CodeRule],
}

impl CodeTable {
    /// First matching rule turned into an error, or `None` when the body carries
    /// no known failure token.
    pub fn classify(&self, body: &str) -> Option<GatewayError> {
        let rule = self.rules.iter().find(|rule| rule.matches(body))?;
        tracing::debug!(table = self.name, token = rule.token, "matched status token");
        Some(GatewayError::new(rule.kind, rule.code(), body))
    }
}

/// Authentication failure on the `smsapi` host endpoints.
const AUTH_ERR: &str = "ERR: 301";
/// Authentication failure on the `mzone` host endpoints.
const AUTH_ERR_MZONE: &str = "Err:300";

pub static SEND: CodeTable = CodeTable {
    name: "send",
    rules: &[
        CodeRule::start(AUTH_ERR, AuthenticationFailed),
        CodeRule::start("ERR: 305", InsufficientCredits),
    ],
};

pub static CREDIT_SUBSCRIBE: CodeTable = CodeTable {
    name: "credit_subscribe",
    rules: &[
        CodeRule::start(AUTH_ERR, AuthenticationFailed),
        CodeRule::start("Err:703", InvalidRequest),
        CodeRule::start("Err:704", InvalidRequest),
        CodeRule::start("Err:705", KeywordTaken),
        CodeRule::start(AUTH_ERR_MZONE, AuthenticationFailed),
        CodeRule::start("Err:715", AccountUpdateFailed),
        CodeRule::start("Err:716", PaymentDeclined),
    ],
};

pub static CREDIT_BALANCE: CodeTable = CodeTable {
    name: "credit_balance",
    rules: &[CodeRule::anywhere(AUTH_ERR, AuthenticationFailed)],
};

/// Only authentication failures are errors here; every other body is an
/// answer to "is it available".
pub static KEYWORD_CHECK: CodeTable = CodeTable {
    name: "keyword_check",
    rules: &[
        CodeRule::start(AUTH_ERR, AuthenticationFailed),
        CodeRule::start(AUTH_ERR_MZONE, AuthenticationFailed),
    ],
};

pub static KEYWORD_REGISTER: CodeTable = CodeTable {
    name: "keyword_register",
    rules: &[
        CodeRule::start(AUTH_ERR, AuthenticationFailed),
        CodeRule::anywhere(AUTH_ERR_MZONE, AuthenticationFailed),
        CodeRule::anywhere("Err:705", KeywordTaken),
        CodeRule::anywhere("Err:712", OperationNotPermitted),
        CodeRule::anywhere("Err:700", InvalidRequest),
        CodeRule::anywhere("Err:701", InvalidRequest),
        CodeRule::anywhere("Err:702", InvalidRequest),
        CodeRule::anywhere("Err:703", InvalidRequest),
        CodeRule::anywhere("Err:704", InvalidRequest),
        CodeRule::anywhere("Err:706", InvalidRequest),
        CodeRule::anywhere("Err:707", InvalidRequest),
        CodeRule::anywhere("Err:708", InvalidRequest),
        CodeRule::anywhere("Err:709", InvalidRequest),
        CodeRule::anywhere("Err:710", InvalidRequest),
        CodeRule::anywhere("Err:711", InvalidRequest),
        CodeRule::anywhere("Err:713", InvalidRequest),
        CodeRule::anywhere("Err:714", InvalidRequest),
    ],
};

/// Anything not matched here and not echoing `SERVICEID` is a generic rejection.
pub static KEYWORD_DELETE: CodeTable = CodeTable {
    name: "keyword_delete",
    rules: &[
        CodeRule::start(AUTH_ERR, AuthenticationFailed),
        CodeRule::anywhere(AUTH_ERR_MZONE, AuthenticationFailed),
        CodeRule::anywhere("Err:712", OperationNotPermitted),
    ],
};

fn trailing_code(token: &str) -> Option<u16> {
    token
        .rsplit(|c: char| !c.is_ascii_digit())
        .next()
        .filter(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
}

/// Code of a leading `ERR: NNN` / `Err:NNN` token, if the body opens with one.
pub fn leading_status_code(body: &str) -> Option<u16> {
    let body = body.trim_start();
    let rest = body
        .strip_prefix("ERR:")
        .or_else(|| body.strip_prefix("Err:"))?;
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(table: &CodeTable, body: &str) -> Option<ErrorKind> {
        table.classify(body).map(|err| err.kind())
    }

    #[test]
    fn auth_code_fails_on_every_endpoint() {
        for table in [
            &SEND,
            &CREDIT_SUBSCRIBE,
            &CREDIT_BALANCE,
            &KEYWORD_CHECK,
            &KEYWORD_REGISTER,
            &KEYWORD_DELETE,
        ] {
            let err = table
                .classify("ERR: 301 Invalid user or password")
                .unwrap_or_else(|| panic!("{} did not classify auth failure", table.name));
            assert_eq!(err.kind(), AuthenticationFailed, "{}", table.name);
            assert_eq!(err.code(), Some(301));
            assert_eq!(err.raw(), "ERR: 301 Invalid user or password");
        }
    }

    #[test]
    fn send_table_maps_credit_exhaustion() {
        assert_eq!(kind_of(&SEND, "ERR: 305 no credits"), Some(InsufficientCredits));
        assert_eq!(kind_of(&SEND, "JOBID: 15551234567:1"), None);
        // Only a leading token counts on the send endpoint.
        assert_eq!(kind_of(&SEND, "JOBID: 1:2 ERR: 305"), None);
    }

    #[test]
    fn same_code_differs_per_endpoint() {
        assert_eq!(kind_of(&CREDIT_SUBSCRIBE, "Err:705"), Some(KeywordTaken));
        assert_eq!(kind_of(&KEYWORD_CHECK, "Err:705"), None);
        assert_eq!(kind_of(&KEYWORD_DELETE, "Err:705"), None);
        assert_eq!(kind_of(&CREDIT_SUBSCRIBE, "Err:712"), None);
        assert_eq!(
            kind_of(&KEYWORD_REGISTER, "Err:712"),
            Some(OperationNotPermitted)
        );
    }

    #[test]
    fn credit_subscribe_table() {
        assert_eq!(kind_of(&CREDIT_SUBSCRIBE, "Err:703"), Some(InvalidRequest));
        assert_eq!(kind_of(&CREDIT_SUBSCRIBE, "Err:704"), Some(InvalidRequest));
        assert_eq!(
            kind_of(&CREDIT_SUBSCRIBE, "Err:300"),
            Some(AuthenticationFailed)
        );
        assert_eq!(
            kind_of(&CREDIT_SUBSCRIBE, "Err:715"),
            Some(AccountUpdateFailed)
        );
        assert_eq!(kind_of(&CREDIT_SUBSCRIBE, "Err:716"), Some(PaymentDeclined));
        assert_eq!(kind_of(&CREDIT_SUBSCRIBE, "OK"), None);
    }

    #[test]
    fn register_table_covers_validation_family() {
        for code in [
            700, 701, 702, 703, 704, 706, 707, 708, 709, 710, 711, 713, 714,
        ] {
            let body = format!("Response: Err:{code}: invalid");
            let err = KEYWORD_REGISTER.classify(&body).unwrap();
            assert_eq!(err.kind(), InvalidRequest, "code {code}");
            assert_eq!(err.code(), Some(code));
        }
        assert_eq!(kind_of(&KEYWORD_REGISTER, "Err:705"), Some(KeywordTaken));
        assert_eq!(kind_of(&KEYWORD_REGISTER, "SERVICEID:4432"), None);
    }

    #[test]
    fn leading_status_code_reads_both_spellings() {
        assert_eq!(leading_status_code("ERR: 301 bad"), Some(301));
        assert_eq!(leading_status_code("  Err:719:oops"), Some(719));
        assert_eq!(leading_status_code("SERVICEID:1"), None);
        assert_eq!(leading_status_code("Err:"), None);
    }
}
