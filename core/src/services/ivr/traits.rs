//! Outbound SMS seam for the call flow

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send `message` to `phone`, returning the provider's message id
    async fn send_sms(&self, phone: &str, message: &str) -> Result<String, String>;

    /// Short provider label for health reporting
    fn provider_name(&self) -> &str;
}
