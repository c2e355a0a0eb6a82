//! Error handling for the HTTP layer

pub mod error;

pub use error::{handle_domain_error, not_found, validation_error_response, ApiError};
