//! In-memory verification code store

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::entities::{CallerId, VerificationEntry};
use crate::domain::value_objects::VerifyOutcome;
use crate::services::clock::{Clock, SystemClock};

use super::config::VerificationStoreConfig;

/// Store of live verification codes, at most one per caller
///
/// A single mutex guards the whole map. Each operation holds it for one map
/// mutation and never across I/O, so callers on different identifiers only
/// contend for that instant. Expiry is checked on every read; [`sweep`]
/// only reclaims memory.
///
/// [`sweep`]: VerificationStore::sweep
pub struct VerificationStore {
    entries: Mutex<HashMap<String, VerificationEntry>>,
    config: VerificationStoreConfig,
    clock: Arc<dyn Clock>,
}

impl VerificationStore {
    /// Create a store reading wall-clock time
    pub fn new(config: VerificationStoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a store with an injected time source
    ///
    /// Out-of-range settings are clamped so `generate` always succeeds.
    pub fn with_clock(config: VerificationStoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            config: config.sanitized(),
            clock,
        }
    }

    pub fn config(&self) -> &VerificationStoreConfig {
        &self.config
    }

    /// Issue a fresh code for `identifier`, replacing any previous one
    ///
    /// The returned code is meant for delivery over an external channel.
    pub fn generate(&self, identifier: &CallerId) -> String {
        let code = VerificationEntry::generate_code(self.config.code_length);
        let now = self.clock.now();
        let entry = VerificationEntry::new(
            identifier.as_str().to_string(),
            code.clone(),
            now,
            self.config.code_ttl,
        );
        let expires_at = entry.expires_at;

        let replaced = self
            .entries
            .lock()
            .insert(identifier.as_str().to_string(), entry)
            .is_some();

        tracing::info!(
            caller = %identifier.masked(),
            replaced_previous = replaced,
            expires_at = %expires_at,
            event = "code_generated",
            "Generated verification code"
        );

        code
    }

    /// Check a submitted code against the live entry for `identifier`
    ///
    /// Expired and matching entries are removed. A mismatch counts as a failed
    /// attempt; the attempt that reaches the configured maximum revokes the
    /// code, after which the caller sees [`VerifyOutcome::NotFound`].
    pub fn verify(&self, identifier: &CallerId, submitted: &str) -> VerifyOutcome {
        let now = self.clock.now();
        let max_attempts = self.config.max_attempts;

        let outcome = {
            let mut entries = self.entries.lock();
            match entries.get_mut(identifier.as_str()) {
                None => VerifyOutcome::NotFound,
                Some(entry) if entry.is_expired_at(now) => {
                    entries.remove(identifier.as_str());
                    VerifyOutcome::Expired
                }
                Some(entry) if entry.matches(submitted) => {
                    entries.remove(identifier.as_str());
                    VerifyOutcome::Accepted
                }
                Some(entry) => {
                    entry.attempts += 1;
                    let remaining_attempts = entry.remaining_attempts(max_attempts);
                    if remaining_attempts == 0 {
                        entries.remove(identifier.as_str());
                    }
                    VerifyOutcome::Rejected { remaining_attempts }
                }
            }
        };

        match outcome {
            VerifyOutcome::Accepted => tracing::info!(
                caller = %identifier.masked(),
                event = "code_accepted",
                "Verification code accepted"
            ),
            VerifyOutcome::Rejected { remaining_attempts: 0 } => tracing::warn!(
                caller = %identifier.masked(),
                max_attempts = max_attempts,
                event = "code_revoked",
                "Maximum verification attempts reached, code revoked"
            ),
            VerifyOutcome::Rejected { remaining_attempts } => tracing::warn!(
                caller = %identifier.masked(),
                remaining_attempts = remaining_attempts,
                event = "code_rejected",
                "Verification code mismatch"
            ),
            VerifyOutcome::Expired => tracing::info!(
                caller = %identifier.masked(),
                event = "code_expired",
                "Verification code expired"
            ),
            VerifyOutcome::NotFound => tracing::debug!(
                caller = %identifier.masked(),
                event = "code_not_found",
                "No active verification code"
            ),
        }

        outcome
    }

    /// Remove any code for `identifier`; returns whether one was present
    pub fn invalidate(&self, identifier: &CallerId) -> bool {
        let removed = self.entries.lock().remove(identifier.as_str()).is_some();
        if removed {
            tracing::info!(
                caller = %identifier.masked(),
                event = "code_invalidated",
                "Verification code invalidated"
            );
        }
        removed
    }

    /// Drop every expired entry; returns how many were removed
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    /// Whether `identifier` has a live code
    pub fn has_active(&self, identifier: &CallerId) -> bool {
        let now = self.clock.now();
        self.entries
            .lock()
            .get(identifier.as_str())
            .map_or(false, |entry| !entry.is_expired_at(now))
    }

    /// Number of live codes
    pub fn active_count(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .lock()
            .values()
            .filter(|entry| !entry.is_expired_at(now))
            .count()
    }
}

impl Default for VerificationStore {
    fn default() -> Self {
        Self::new(VerificationStoreConfig::default())
    }
}
