use crate::domain::validation::ValidationError;
use crate::domain::value::{
    BatchName, HelpMessage, Keyword, MessageText, MobileNumber, NetworkId, ProcessorUrl,
    ServiceId, ServiceName, ShortCode, StopMessage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Who a message goes to. The variant decides which response shape is expected.
pub enum SendTarget {
    Single(MobileNumber),
    Batch(Batch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    recipients: Vec<MobileNumber>,
    name: BatchName,
}

impl SendTarget {
    pub fn single(number: MobileNumber) -> Self {
        Self::Single(number)
    }

    /// Build a batch target. Fails if `recipients` is empty.
    pub fn batch(
        recipients: Vec<MobileNumber>,
        name: Option<BatchName>,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: MobileNumber::FIELD,
            });
        }
        Ok(Self::Batch(Batch {
            recipients,
            name: name.unwrap_or_default(),
        }))
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }
}

impl Batch {
    pub fn recipients(&self) -> &[MobileNumber] {
        &self.recipients
    }

    pub fn name(&self) -> &BatchName {
        &self.name
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Originating short code; the profile's short code when `None`.
    pub from: Option<ShortCode>,
    pub network_id: Option<NetworkId>,
}

#[derive(Debug, Clone)]
pub struct SendMessage {
    target: SendTarget,
    text: MessageText,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(target: SendTarget, text: MessageText, options: SendOptions) -> Self {
        Self {
            target,
            text,
            options,
        }
    }

    pub fn target(&self) -> &SendTarget {
        &self.target
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// `ACTION` value on the keyword register/delete endpoint.
pub enum KeywordAction {
    Add,
    Delete,
}

impl KeywordAction {
    pub const FIELD: &'static str = "ACTION";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
/// Metadata for registering a keyword service (`ACTION=ADD`).
pub struct KeywordRegistration {
    pub service_name: ServiceName,
    pub keyword: Keyword,
    pub processor_url: ProcessorUrl,
    pub help_message: HelpMessage,
    pub stop_message: StopMessage,
    /// Short code the keyword is routed on; the profile's short code when `None`.
    pub short_code: Option<ShortCode>,
}

impl KeywordRegistration {
    pub fn action(&self) -> KeywordAction {
        KeywordAction::Add
    }
}

#[derive(Debug, Clone)]
/// Removal of a previously registered keyword service (`ACTION=DELETE`).
pub struct DeleteService {
    pub short_code: ShortCode,
    pub service_id: ServiceId,
    pub keyword: Keyword,
}

impl DeleteService {
    pub fn new(short_code: ShortCode, service_id: ServiceId, keyword: Keyword) -> Self {
        Self {
            short_code,
            service_id,
            keyword,
        }
    }

    pub fn action(&self) -> KeywordAction {
        KeywordAction::Delete
    }
}
