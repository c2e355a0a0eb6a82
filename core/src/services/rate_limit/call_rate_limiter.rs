use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::domain::entities::CallerId;
use crate::services::clock::{Clock, SystemClock};

/// Admits at most one call per caller within a sliding window
///
/// Only admitted calls are recorded; a rejected call does not extend the
/// window. A zero window admits every call.
pub struct CallRateLimiter {
    last_admitted: Mutex<HashMap<String, DateTime<Utc>>>,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl CallRateLimiter {
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, Arc::new(SystemClock))
    }

    pub fn with_clock(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            last_admitted: Mutex::new(HashMap::new()),
            window,
            clock,
        }
    }

    /// Limiter built from a window in seconds; negative values disable limiting
    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(Duration::seconds(seconds.max(0)))
    }

    /// Admit `caller` unless it was admitted less than one window ago
    pub fn check_and_record(&self, caller: &CallerId) -> bool {
        if self.window <= Duration::zero() {
            return true;
        }

        let now = self.clock.now();
        let mut last_admitted = self.last_admitted.lock();

        if let Some(last) = last_admitted.get(caller.as_str()) {
            if now - *last < self.window {
                tracing::warn!(
                    caller = %caller.masked(),
                    retry_after_seconds = (self.window - (now - *last)).num_seconds(),
                    event = "call_rate_limited",
                    "Call rejected by rate limiter"
                );
                return false;
            }
        }

        last_admitted.insert(caller.as_str().to_string(), now);
        true
    }

    /// Drop records whose window has elapsed; returns how many were removed
    pub fn prune(&self) -> usize {
        let now = self.clock.now();
        let window = self.window;
        let mut last_admitted = self.last_admitted.lock();
        let before = last_admitted.len();
        last_admitted.retain(|_, last| now - *last < window);
        before - last_admitted.len()
    }

    /// Number of callers currently inside their window
    pub fn tracked_callers(&self) -> usize {
        self.last_admitted.lock().len()
    }
}
