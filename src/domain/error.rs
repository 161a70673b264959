use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Closed taxonomy of failures surfaced by the client.
pub enum ErrorKind {
    AuthenticationFailed,
    InsufficientCredits,
    InvalidRequest,
    KeywordTaken,
    AccountUpdateFailed,
    PaymentDeclined,
    OperationNotPermitted,
    /// The gateway refused the call without a more specific code.
    RemoteRejected,
    /// A success-shaped body without the expected token, or a non-numeric
    /// body where a number was required.
    MalformedResponse,
    /// The HTTP transport failed before a body was received.
    ConnectionError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AuthenticationFailed => "authentication failed",
            Self::InsufficientCredits => "insufficient credits",
            Self::InvalidRequest => "invalid request",
            Self::KeywordTaken => "keyword taken",
            Self::AccountUpdateFailed => "account update failed",
            Self::PaymentDeclined => "payment declined",
            Self::OperationNotPermitted => "operation not permitted",
            Self::RemoteRejected => "rejected by gateway",
            Self::MalformedResponse => "malformed response",
            Self::ConnectionError => "connection error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {raw:?}")]
/// A failure signaled (or implied) by a gateway response body.
///
/// Always carries the raw body for diagnostics.
pub struct GatewayError {
    kind: ErrorKind,
    code: Option<u16>,
    raw: String,
}

impl GatewayError {
    pub(crate) fn new(kind: ErrorKind, code: Option<u16>, raw: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            raw: raw.into(),
        }
    }

    pub(crate) fn malformed(raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedResponse, None, raw)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Numeric gateway code from the matched status token (`ERR: 301` → `301`).
    pub fn code(&self) -> Option<u16> {
        self.code
    }

    /// Response body exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_raw_body() {
        let err = GatewayError::new(ErrorKind::KeywordTaken, Some(705), "Err:705: taken");
        assert_eq!(err.to_string(), "keyword taken: \"Err:705: taken\"");
        assert_eq!(err.code(), Some(705));
        assert_eq!(err.raw(), "Err:705: taken");

        let err = GatewayError::malformed("hello");
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        assert_eq!(err.code(), None);
    }
}
