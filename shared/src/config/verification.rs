//! Verification code policy configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Smallest supported code length
pub const MIN_CODE_LENGTH: usize = 4;

/// Largest supported code length (10^9 still fits a `u32`)
pub const MAX_CODE_LENGTH: usize = 9;

/// Verification code lifetime, shape and abuse limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes a generated code stays valid
    pub code_ttl_minutes: i64,

    /// Number of digits in a generated code
    pub code_length: usize,

    /// Failed attempts allowed before the code is revoked
    pub max_attempts: u32,

    /// Minimum seconds between two admitted inbound calls from one caller
    pub call_rate_limit_seconds: i64,

    /// Seconds between background sweeps of expired state
    pub sweep_interval_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 10,
            code_length: 6,
            max_attempts: 3,
            call_rate_limit_seconds: 300,
            sweep_interval_seconds: 60,
        }
    }
}

impl VerificationConfig {
    /// Load from `CODE_TTL_MINUTES`, `CODE_LENGTH`, `MAX_VERIFY_ATTEMPTS`,
    /// `CALL_RATE_LIMIT_SECONDS` and `SWEEP_INTERVAL_SECONDS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_minutes: env_or("CODE_TTL_MINUTES", defaults.code_ttl_minutes),
            code_length: env_or("CODE_LENGTH", defaults.code_length),
            max_attempts: env_or("MAX_VERIFY_ATTEMPTS", defaults.max_attempts),
            call_rate_limit_seconds: env_or("CALL_RATE_LIMIT_SECONDS", defaults.call_rate_limit_seconds),
            sweep_interval_seconds: env_or("SWEEP_INTERVAL_SECONDS", defaults.sweep_interval_seconds),
        }
        .sanitized()
    }

    /// Clamp out-of-range values to something the store can honor
    pub fn sanitized(mut self) -> Self {
        let clamped = self.code_length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH);
        if clamped != self.code_length {
            tracing::warn!(
                requested = self.code_length,
                using = clamped,
                "Code length out of range, clamping"
            );
            self.code_length = clamped;
        }
        if self.max_attempts == 0 {
            tracing::warn!("MAX_VERIFY_ATTEMPTS must be at least 1, using 1");
            self.max_attempts = 1;
        }
        if self.code_ttl_minutes <= 0 {
            tracing::warn!(
                requested = self.code_ttl_minutes,
                "Code TTL must be positive, using default"
            );
            self.code_ttl_minutes = Self::default().code_ttl_minutes;
        }
        if self.call_rate_limit_seconds < 0 {
            self.call_rate_limit_seconds = 0;
        }
        if self.sweep_interval_seconds == 0 {
            self.sweep_interval_seconds = Self::default().sweep_interval_seconds;
        }
        self
    }
}
