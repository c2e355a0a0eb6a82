//! Per-caller admission control for inbound calls

mod call_rate_limiter;

pub use call_rate_limiter::CallRateLimiter;
