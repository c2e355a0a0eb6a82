//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Business IVR
//! backend. It provides concrete implementations of the outbound SMS channel
//! the call flow depends on.
//!
//! ## Architecture
//!
//! - **SMS**: SMS service integrations (Twilio, development mock)
//! - **Config**: provider selection and credentials loaded from the environment
//!
//! ## Features
//!
//! - `twilio-sms`: Enable Twilio SMS service (default)

/// SMS service module - External SMS providers
pub mod sms;

/// Configuration module for infrastructure services
pub mod config;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
