//! SMS Service Module
//!
//! This module provides SMS service implementations for delivering
//! verification codes. It includes a Twilio provider, a mock implementation
//! for development and a stand-in used when no provider can be built.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Console output for development
//! - **Twilio Support**: Production SMS via Twilio API
//! - **Core Adapter**: Bridges any provider to the call flow's SMS seam

pub mod mock_sms;
pub mod sms_service;
pub mod sms_trait_adapter;
pub mod unconfigured;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use mock_sms::MockSmsService;
pub use sms_service::{is_valid_phone_number, SmsService, MAX_MESSAGE_LENGTH};
pub use sms_trait_adapter::SmsServiceAdapter;
pub use unconfigured::UnconfiguredSmsService;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(test)]
mod tests;

use crate::config::SmsConfig;

/// Create an SMS service based on configuration
///
/// `mock` yields the console mock. `twilio` yields the Twilio client when
/// its credentials are complete and the unconfigured stand-in otherwise.
/// Unknown providers fall back to the mock.
pub fn create_sms_service(config: &SmsConfig) -> Box<dyn SmsService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockSmsService::new()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let twilio_config = TwilioConfig {
                account_sid: config.account_sid.clone(),
                auth_token: config.auth_token.clone(),
                from_number: config.from_number.clone(),
                max_retries: config.max_retries,
                retry_delay_ms: config.retry_delay_ms,
            };

            match TwilioSmsService::new(twilio_config) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Twilio SMS service: {}", e);
                    Box::new(UnconfiguredSmsService::new(e.to_string()))
                }
            }
        }
        #[cfg(not(feature = "twilio-sms"))]
        "twilio" => {
            tracing::error!("Twilio requested but the twilio-sms feature is disabled");
            Box::new(UnconfiguredSmsService::new("twilio-sms feature disabled"))
        }
        _ => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockSmsService::new())
        }
    }
}
