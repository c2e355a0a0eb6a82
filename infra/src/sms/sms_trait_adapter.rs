//! SMS Service Trait Adapter
//!
//! Implements the core `SmsServiceTrait` for any infrastructure SMS
//! provider, bridging the infrastructure implementation with the call flow.

use async_trait::async_trait;
use ivr_core::services::ivr::SmsServiceTrait;

use crate::config::SmsConfig;
use crate::sms::{create_sms_service, SmsService};

/// Adapter that implements the core SmsServiceTrait for a boxed provider
pub struct SmsServiceAdapter {
    inner: Box<dyn SmsService>,
}

impl SmsServiceAdapter {
    pub fn new(inner: Box<dyn SmsService>) -> Self {
        Self { inner }
    }

    /// Build the provider selected by `config`
    pub fn from_config(config: &SmsConfig) -> Self {
        Self::new(create_sms_service(config))
    }

    /// Whether the underlying provider reports itself usable
    pub async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String> {
        self.inner
            .send_sms(phone, message)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}
