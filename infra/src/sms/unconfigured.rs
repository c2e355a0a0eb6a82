//! Stand-in SMS service used when no provider could be built

use async_trait::async_trait;
use ivr_shared::phone::mask_phone_number;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Fails every send with the reason the real provider is missing
#[derive(Debug, Clone)]
pub struct UnconfiguredSmsService {
    reason: String,
}

impl UnconfiguredSmsService {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SmsService for UnconfiguredSmsService {
    async fn send_sms(&self, phone_number: &str, _message: &str) -> Result<String, InfrastructureError> {
        tracing::error!(
            phone = %mask_phone_number(phone_number),
            reason = %self.reason,
            "SMS requested but no provider is configured"
        );
        Err(InfrastructureError::Config(format!(
            "SMS provider not configured: {}",
            self.reason
        )))
    }

    fn provider_name(&self) -> &str {
        "unconfigured"
    }

    async fn is_available(&self) -> bool {
        false
    }
}
