//! Typed Rust client for the Wire2Air SMS gateway HTTP API.
//!
//! The gateway speaks form-encoded POSTs and answers in loosely structured
//! plain text (`JOBID: ...`, `SERVICEID:...`, `ERR: 301`, `Err:705`). This crate
//! keeps three layers: a domain layer of strong types, a transport layer for the
//! wire-format quirks (one error-code table per endpoint), and a small client
//! layer running one request per operation.
//!
//! ```rust,no_run
//! use wire2air::{
//!     AccountProfile, MessageText, MobileNumber, SendMessage, SendOptions, SendTarget,
//!     Wire2AirClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wire2air::Wire2AirError> {
//!     let client = Wire2AirClient::new(AccountProfile::from_env()?);
//!     let target = SendTarget::single(MobileNumber::new("17321234567")?);
//!     let request = SendMessage::new(target, MessageText::new("hello")?, SendOptions::default());
//!     let _result = client.send_message(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Endpoints, Wire2AirClient, Wire2AirClientBuilder, Wire2AirError};
pub use domain::{
    AccountProfile, Batch, BatchId, BatchName, CreditCount, DeleteService, ErrorKind,
    GatewayError, HelpMessage, JobId, Keyword, KeywordAction, KeywordRegistration, MessageText,
    MobileNumber, NetworkId, Password, PhoneNumber, ProcessorUrl, ProfileId, SendMessage,
    SendOptions, SendResult, SendTarget, ServiceId, ServiceName, ShortCode, StopMessage, UserId,
    ValidationError, VasId,
};
