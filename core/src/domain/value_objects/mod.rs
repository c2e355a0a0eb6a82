//! Value objects representing immutable domain concepts.

pub mod twiml;
pub mod verify_outcome;

// Re-export commonly used types
pub use twiml::{Dial, Gather, MessagingResponse, Say, VoiceResponse, VoiceVerb};
pub use verify_outcome::VerifyOutcome;
