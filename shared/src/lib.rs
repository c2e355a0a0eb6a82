//! Shared utilities and common types for the Business IVR server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response structures shared by the HTTP layer
//! - Phone number utilities (normalization, masking, validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BusinessConfig, Environment, LoggingConfig, ServerConfig, VerificationConfig,
};
pub use types::{ErrorResponse, HealthResponse};
pub use utils::phone;
