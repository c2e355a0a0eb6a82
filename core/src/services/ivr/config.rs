//! Configuration for the call flow

use ivr_shared::config::BusinessConfig;
use ivr_shared::phone::is_valid_international_phone;

use crate::errors::{DomainError, DomainResult};

/// Voice prompts, gather timing and webhook routing for the IVR
#[derive(Debug, Clone)]
pub struct IvrConfig {
    /// Name announced in greetings and prefixed to SMS bodies
    pub business_name: String,
    /// E.164 number dialled when the caller asks for support
    pub support_number: Option<String>,
    pub voice: String,
    pub language: String,
    /// Seconds to wait for the menu digit
    pub menu_timeout_seconds: u32,
    /// Seconds to wait for the full code
    pub code_timeout_seconds: u32,
    /// Seconds to ring the support line
    pub dial_timeout_seconds: u32,
    /// Webhook path receiving the menu digit
    pub choice_action: String,
    /// Webhook path receiving the entered code
    pub code_action: String,
}

impl Default for IvrConfig {
    fn default() -> Self {
        Self::from(&BusinessConfig::default())
    }
}

impl From<&BusinessConfig> for IvrConfig {
    fn from(business: &BusinessConfig) -> Self {
        Self {
            business_name: business.name.clone(),
            support_number: business.support_number.clone(),
            voice: business.voice.clone(),
            language: business.language.clone(),
            menu_timeout_seconds: 15,
            code_timeout_seconds: 45,
            dial_timeout_seconds: 30,
            choice_action: "/handle_verification_choice".to_string(),
            code_action: "/verify_code".to_string(),
        }
    }
}

impl IvrConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.business_name.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "business name must not be empty".to_string(),
            });
        }

        if let Some(number) = &self.support_number {
            if !is_valid_international_phone(number) {
                return Err(DomainError::Configuration {
                    message: format!("support number must be E.164, got {}", number),
                });
            }
        }

        for (name, action) in [
            ("choice_action", &self.choice_action),
            ("code_action", &self.code_action),
        ] {
            if !action.starts_with('/') {
                return Err(DomainError::Configuration {
                    message: format!("{} must be an absolute path, got {}", name, action),
                });
            }
        }

        Ok(())
    }
}
