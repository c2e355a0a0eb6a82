//! Call and SMS conversation flow
//!
//! This module turns webhook events into TwiML documents:
//! - Inbound call greeting with per-caller rate limiting
//! - Menu handling (send a code by SMS, or route to support)
//! - Keypad code entry against the verification store
//! - Inbound SMS keywords and code replies

mod config;
mod prompts;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::IvrConfig;
pub use service::IvrService;
pub use traits::SmsServiceTrait;
