//! Verification entry entity for caller identity confirmation.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Failed attempts allowed before a code is revoked
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Length of a generated verification code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default lifetime of a verification code (10 minutes)
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 10;

/// A one-time verification code issued to a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEntry {
    /// Caller identity the code was issued to
    pub identifier: String,

    /// The numeric verification code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp from which the code is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// Number of failed verification attempts so far
    pub attempts: u32,
}

impl VerificationEntry {
    /// Creates a new entry issued at `created_at` and valid for `ttl`
    pub fn new(identifier: String, code: String, created_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            identifier,
            code,
            created_at,
            expires_at: created_at + ttl,
            attempts: 0,
        }
    }

    /// Generates a random numeric code of `length` digits, zero-padded
    ///
    /// `length` must be between 1 and 9 so the range fits a `u32`.
    pub fn generate_code(length: usize) -> String {
        debug_assert!((1..=9).contains(&length));
        let upper = 10u32.pow(length as u32);
        let code: u32 = rand::thread_rng().gen_range(0..upper);
        format!("{:0width$}", code, width = length)
    }

    /// Checks if the entry has expired at `now`
    ///
    /// An entry is live strictly before `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Exact match of a submitted code, compared in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len() && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Remaining failed attempts before revocation
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempts)
    }

}
