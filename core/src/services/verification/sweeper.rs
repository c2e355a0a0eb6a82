//! Periodic reclamation of expired verification state
//!
//! Expiry is enforced on every store read, so sweeping only bounds memory.
//! The sweeper also prunes elapsed call rate-limit records.

use std::sync::Arc;

use ivr_shared::config::VerificationConfig;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::services::rate_limit::CallRateLimiter;

use super::store::VerificationStore;

/// Configuration for the background sweeper
#[derive(Debug, Clone)]
pub struct SweeperConfig {
    /// How often to sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            enabled: true,
        }
    }
}

impl From<&VerificationConfig> for SweeperConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            interval_seconds: config.sweep_interval_seconds.max(1),
            enabled: true,
        }
    }
}

/// Removes expired codes and stale rate-limit records
pub struct VerificationSweeper {
    store: Arc<VerificationStore>,
    rate_limiter: Arc<CallRateLimiter>,
    config: SweeperConfig,
}

impl VerificationSweeper {
    pub fn new(
        store: Arc<VerificationStore>,
        rate_limiter: Arc<CallRateLimiter>,
        config: SweeperConfig,
    ) -> Self {
        Self {
            store,
            rate_limiter,
            config,
        }
    }

    /// Run a single sweep cycle
    pub fn run_sweep(&self) -> SweepResult {
        let result = SweepResult {
            expired_codes_removed: self.store.sweep(),
            rate_limit_entries_pruned: self.rate_limiter.prune(),
        };

        if result.total_cleaned() > 0 {
            info!(
                expired_codes_removed = result.expired_codes_removed,
                rate_limit_entries_pruned = result.rate_limit_entries_pruned,
                active_codes = self.store.active_count(),
                event = "sweep_completed",
                "Sweep removed stale verification state"
            );
        } else {
            debug!("Sweep found nothing to remove");
        }

        result
    }

    /// Start the sweeper as a background task
    ///
    /// Returns `None` when sweeping is disabled. Aborting the returned handle
    /// stops the loop.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Verification sweeper is disabled");
            return None;
        }

        let period = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                "Verification sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(period);
            // The first tick completes immediately
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;
                self.run_sweep();
            }
        }))
    }
}

/// Result of a sweep cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Number of expired codes removed from the store
    pub expired_codes_removed: usize,
    /// Number of elapsed rate-limit records dropped
    pub rate_limit_entries_pruned: usize,
}

impl SweepResult {
    /// Get total number of items cleaned up
    pub fn total_cleaned(&self) -> usize {
        self.expired_codes_removed + self.rate_limit_entries_pruned
    }
}
