//! # Business IVR Core
//!
//! Core business logic and domain layer for the Business IVR backend.
//! This crate contains the verification code store, the call rate limiter,
//! the IVR call-flow service, TwiML value objects and domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
