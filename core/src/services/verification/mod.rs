//! Verification code module
//!
//! This module owns the one-time code lifecycle:
//! - Code generation with a fixed time-to-live
//! - Code verification with attempt tracking and revocation
//! - Explicit invalidation when a caller opts out
//! - Periodic sweeping of expired codes

mod config;
mod store;
mod sweeper;

#[cfg(test)]
mod tests;

pub use config::VerificationStoreConfig;
pub use store::VerificationStore;
pub use sweeper::{SweepResult, SweeperConfig, VerificationSweeper};
