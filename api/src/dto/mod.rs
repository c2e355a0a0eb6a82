//! Request and response shapes for the HTTP layer

pub mod error;
pub mod webhook;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use webhook::{SmsWebhookForm, VoiceWebhookForm};
