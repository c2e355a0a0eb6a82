//! Domain entities representing core business objects.

pub mod caller_id;
pub mod verification_entry;

// Re-export commonly used types
pub use caller_id::CallerId;
pub use verification_entry::{
    VerificationEntry, DEFAULT_CODE_LENGTH, DEFAULT_CODE_TTL_MINUTES, DEFAULT_MAX_ATTEMPTS,
};
