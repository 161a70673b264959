use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NotDigits { field: &'static str, input: String },
    InvalidPhoneNumber { input: String },
    InvalidUrl { field: &'static str, input: String },
    OutOfRange { field: &'static str, min: u64, actual: u64 },
    InvalidConfig { message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotDigits { field, input } => {
                write!(f, "{field} must contain only decimal digits: {input}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidUrl { field, input } => {
                write!(f, "{field} must be an absolute http(s) url: {input}")
            }
            Self::OutOfRange { field, min, actual } => {
                write!(f, "{field} out of range: {actual} (expected >= {min})")
            }
            Self::InvalidConfig { message } => write!(f, "invalid account profile: {message}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "TO" };
        assert_eq!(err.to_string(), "TO must not be empty");

        let err = ValidationError::NotDigits {
            field: "TO",
            input: "555-abc".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "TO must contain only decimal digits: 555-abc"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::InvalidUrl {
            field: "PROCESSORURL",
            input: "ftp://x".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "PROCESSORURL must be an absolute http(s) url: ftp://x"
        );

        let err = ValidationError::OutOfRange {
            field: "KEYWORDREDITS",
            min: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "KEYWORDREDITS out of range: 0 (expected >= 1)"
        );

        let err = ValidationError::InvalidConfig {
            message: "unknown field `foo`".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid account profile: unknown field `foo`"
        );
    }
}
