//! Business services containing domain logic and use cases.

pub mod clock;
pub mod ivr;
pub mod rate_limit;
pub mod verification;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use ivr::{IvrConfig, IvrService, SmsServiceTrait};
pub use rate_limit::CallRateLimiter;
pub use verification::{
    SweepResult, SweeperConfig, VerificationStore, VerificationStoreConfig, VerificationSweeper,
};
