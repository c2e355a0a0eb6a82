//! Form bodies posted by the telephony platform
//!
//! Field names follow the platform's capitalization. Every field defaults to
//! empty so a missing value is reported through validation rather than as a
//! deserialization failure.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Voice webhook: inbound call, menu choice and code entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VoiceWebhookForm {
    /// Caller ID (E.164)
    #[serde(rename = "From", default)]
    #[validate(length(min = 1, max = 64))]
    pub from: String,

    /// Keypad digits collected by a gather
    #[serde(rename = "Digits", default)]
    #[validate(length(max = 32))]
    pub digits: String,

    /// Platform call identifier, used only for log correlation
    #[serde(rename = "CallSid", default)]
    pub call_sid: Option<String>,
}

/// Messaging webhook: inbound SMS
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SmsWebhookForm {
    /// Sender (E.164)
    #[serde(rename = "From", default)]
    #[validate(length(min = 1, max = 64))]
    pub from: String,

    /// Message text
    #[serde(rename = "Body", default)]
    #[validate(length(max = 1600))]
    pub body: String,

    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,
}
