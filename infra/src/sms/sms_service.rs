//! SMS Service Interface
//!
//! Defines the trait for SMS service implementations that deliver
//! verification codes.

use async_trait::async_trait;
use ivr_shared::phone::is_valid_international_phone;

use crate::InfrastructureError;

/// Longest body accepted by the providers (Twilio concatenated limit)
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Twilio SMS API
/// - Mock implementation for development
/// - Unconfigured stand-in that always fails
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Get the service provider name ("twilio", "mock", "unconfigured")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Validate phone number format (E.164)
pub fn is_valid_phone_number(phone: &str) -> bool {
    is_valid_international_phone(phone)
}

/// Reject bodies the providers would refuse
pub(crate) fn check_message_length(message: &str) -> Result<(), InfrastructureError> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(InfrastructureError::Sms(format!(
            "Message exceeds maximum length of {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("+14155552671"));
        assert!(is_valid_phone_number("+441234567890"));

        assert!(!is_valid_phone_number("14155552671"));
        assert!(!is_valid_phone_number("+0123456789"));
        assert!(!is_valid_phone_number("+1415abc2671"));
        assert!(!is_valid_phone_number("+"));
    }

    #[test]
    fn test_message_length_limit() {
        assert!(check_message_length(&"a".repeat(MAX_MESSAGE_LENGTH)).is_ok());
        assert!(check_message_length(&"a".repeat(MAX_MESSAGE_LENGTH + 1)).is_err());
    }
}
