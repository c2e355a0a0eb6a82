//! Type definitions shared by the HTTP layer
//!
//! - `response` - Error bodies and health check payloads

pub mod response;

pub use response::{error_codes, ErrorResponse, HealthResponse, HealthStatus};
