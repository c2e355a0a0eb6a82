//! Configuration for the verification code store

use chrono::Duration;
use ivr_shared::config::verification::{MAX_CODE_LENGTH, MIN_CODE_LENGTH};
use ivr_shared::config::VerificationConfig;

use crate::domain::entities::verification_entry::{
    DEFAULT_CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES, DEFAULT_MAX_ATTEMPTS,
};

/// Configuration for the verification code store
#[derive(Debug, Clone)]
pub struct VerificationStoreConfig {
    /// How long a code stays valid after generation
    pub code_ttl: Duration,
    /// Number of digits in a generated code (4 to 9)
    pub code_length: usize,
    /// Failed attempts after which the code is revoked
    pub max_attempts: u32,
}

impl Default for VerificationStoreConfig {
    fn default() -> Self {
        Self {
            code_ttl: Duration::minutes(DEFAULT_CODE_TTL_MINUTES),
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl VerificationStoreConfig {
    /// Clamp values the store cannot honor
    ///
    /// Code length is kept within 4..=9, at least one attempt is allowed and
    /// a non-positive TTL falls back to the default.
    pub fn sanitized(mut self) -> Self {
        let clamped = self.code_length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH);
        if clamped != self.code_length {
            tracing::warn!(
                requested = self.code_length,
                using = clamped,
                "Store code length out of range, clamping"
            );
            self.code_length = clamped;
        }
        if self.max_attempts == 0 {
            tracing::warn!("Store max attempts must be at least 1, using 1");
            self.max_attempts = 1;
        }
        if self.code_ttl <= Duration::zero() {
            tracing::warn!("Store code TTL must be positive, using default");
            self.code_ttl = Duration::minutes(DEFAULT_CODE_TTL_MINUTES);
        }
        self
    }
}

impl From<&VerificationConfig> for VerificationStoreConfig {
    fn from(config: &VerificationConfig) -> Self {
        let config = config.clone().sanitized();
        Self {
            code_ttl: Duration::minutes(config.code_ttl_minutes),
            code_length: config.code_length,
            max_attempts: config.max_attempts,
        }
    }
}
