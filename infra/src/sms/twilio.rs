//! Twilio SMS Service Implementation
//!
//! This module provides SMS sending capabilities using the Twilio API.
//!
//! ## Features
//!
//! - E.164 validation and normalization through `phonenumber`
//! - Retry with exponential backoff on rate limiting and server errors
//! - Phone number masking in logs

use std::time::Duration;

use async_trait::async_trait;
use ivr_shared::phone::mask_phone_number;
use phonenumber::{Mode, PhoneNumber};
use tracing::{debug, error, info, warn};
use twilio::{Client, OutboundMessage};

use crate::{
    sms::sms_service::{check_message_length, SmsService},
    InfrastructureError,
};

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Maximum delivery attempts
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl TwilioConfig {
    /// Check credentials are present and the sending number is E.164
    pub fn validate(&self) -> Result<(), InfrastructureError> {
        if self.account_sid.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()));
        }
        if self.auth_token.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()));
        }
        if !self.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_PHONE_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }
        Ok(())
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        config.validate()?;
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            "Twilio SMS service initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Ok(Self { client, config })
    }

    /// Validate and normalize phone number to E.164 format
    fn validate_phone_number(&self, phone: &str) -> Result<String, InfrastructureError> {
        if phone.starts_with('+') {
            match phone.parse::<PhoneNumber>() {
                Ok(parsed) => {
                    let formatted = parsed.format().mode(Mode::E164).to_string();
                    debug!("Validated phone number: {}", mask_phone_number(&formatted));
                    Ok(formatted)
                }
                Err(e) => {
                    error!("Invalid phone number format: {}", e);
                    Err(InfrastructureError::Sms(format!(
                        "Invalid phone number format: {}",
                        e
                    )))
                }
            }
        } else {
            // Caller ID without a country code is assumed to be North American
            let with_country = format!("+1{}", phone);
            match with_country.parse::<PhoneNumber>() {
                Ok(parsed) => {
                    let formatted = parsed.format().mode(Mode::E164).to_string();
                    warn!(
                        "Phone number missing country code, assumed US: {}",
                        mask_phone_number(&formatted)
                    );
                    Ok(formatted)
                }
                Err(_) => Err(InfrastructureError::Sms(
                    "Phone number must be in E.164 format (e.g., +14155552671)".to_string(),
                )),
            }
        }
    }

    /// Send SMS with retry logic
    async fn send_with_retry(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending SMS attempt {}/{} to {}",
                attempts,
                max_attempts,
                mask_phone_number(to)
            );

            let msg = OutboundMessage::new(&self.config.from_number, to, message);

            match self.client.send_message(msg).await {
                Ok(response) => {
                    info!(
                        "SMS sent successfully to {} with SID: {}",
                        mask_phone_number(to),
                        response.sid
                    );
                    return Ok(response.sid);
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    error!(
                        "Failed to send SMS (attempt {}/{}): {}",
                        attempts, max_attempts, error_msg
                    );

                    if attempts >= max_attempts {
                        return Err(InfrastructureError::Sms(format!(
                            "Failed to send SMS after {} attempts: {}",
                            max_attempts, error_msg
                        )));
                    }

                    match classify_error(&error_msg) {
                        ErrorClass::RateLimited => {
                            warn!("Rate limit detected, backing off for {:?}", delay)
                        }
                        ErrorClass::ServerError => {
                            warn!("Server error detected, retrying after {:?}", delay)
                        }
                        ErrorClass::ClientError => {
                            return Err(InfrastructureError::Sms(format!(
                                "Invalid request: {}",
                                error_msg
                            )));
                        }
                        ErrorClass::Unknown => {}
                    }

                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ErrorClass {
    RateLimited,
    ServerError,
    ClientError,
    Unknown,
}

/// Map a provider error message to a retry decision
fn classify_error(message: &str) -> ErrorClass {
    let lower = message.to_lowercase();
    if lower.contains("429") || lower.contains("rate") {
        ErrorClass::RateLimited
    } else if ["500", "502", "503", "504"].iter().any(|code| lower.contains(code)) {
        ErrorClass::ServerError
    } else if lower.contains("400") || lower.contains("invalid") {
        ErrorClass::ClientError
    } else {
        ErrorClass::Unknown
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let normalized_phone = self.validate_phone_number(phone_number)?;
        check_message_length(message)?;

        info!(
            "Sending SMS to {} via Twilio (message length: {} chars)",
            mask_phone_number(&normalized_phone),
            message.len()
        );

        self.send_with_retry(&normalized_phone, message).await
    }

    fn provider_name(&self) -> &str {
        "twilio"
    }
}
