//! Configuration management for infrastructure services
//!
//! Handles SMS provider selection and credentials.

use std::env;

use ivr_shared::config::Environment;
use serde::{Deserialize, Serialize};

/// Outbound SMS provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// SMS service provider ("twilio" or "mock")
    pub provider: String,
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    #[serde(skip_serializing)]
    pub auth_token: String,
    /// Sending phone number (E.164)
    pub from_number: String,
    /// Delivery attempts before giving up
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl SmsConfig {
    /// Load SMS settings from the environment
    ///
    /// `SMS_PROVIDER` defaults to `twilio` in production and `mock`
    /// elsewhere. The sending number is read from `TWILIO_PHONE_NUMBER`,
    /// falling back to `TWILIO_FROM_NUMBER`.
    ///
    /// Only the process environment is read; loading `.env` is left to
    /// the binary.
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::default();
        let default_provider = match environment {
            Environment::Production => "twilio",
            _ => "mock",
        };

        Self {
            provider: non_empty("SMS_PROVIDER")
                .map(|p| p.to_lowercase())
                .unwrap_or_else(|| default_provider.to_string()),
            account_sid: non_empty("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: non_empty("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: non_empty("TWILIO_PHONE_NUMBER")
                .or_else(|| non_empty("TWILIO_FROM_NUMBER"))
                .unwrap_or_default(),
            max_retries: non_empty("TWILIO_MAX_RETRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: non_empty("TWILIO_RETRY_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
        }
    }

    /// Whether all Twilio credentials are present
    pub fn has_twilio_credentials(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from_number.is_empty()
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
