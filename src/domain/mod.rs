//! Domain layer: strong types with validation and invariants (no I/O).

mod error;
mod profile;
mod request;
mod response;
mod validation;
mod value;

pub use error::{ErrorKind, GatewayError};
pub use profile::{
    AccountProfile, ENV_PASSWORD, ENV_PROFILE_ID, ENV_SHORT_CODE, ENV_USERNAME, ENV_VASID,
};
pub use request::{
    Batch, DeleteService, KeywordAction, KeywordRegistration, SendMessage, SendOptions,
    SendTarget,
};
pub use response::SendResult;
pub use validation::ValidationError;
pub use value::{
    BatchId, BatchName, CreditCount, HelpMessage, JobId, Keyword, MessageText, MobileNumber,
    NetworkId, Password, PhoneNumber, ProcessorUrl, ProfileId, ServiceId, ServiceName, ShortCode,
    StopMessage, UserId, VasId,
};
