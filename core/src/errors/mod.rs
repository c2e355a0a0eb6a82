//! Domain-specific error types and error handling.

use thiserror::Error;

/// Validation errors raised while turning raw webhook input into domain types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        max: usize,
        actual: usize,
    },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_bridges_into_domain_error() {
        let err: DomainError = ValidationError::RequiredField {
            field: "identifier".to_string(),
        }
        .into();

        assert!(matches!(err, DomainError::Validation(ValidationError::RequiredField { .. })));
        assert_eq!(err.to_string(), "Field required: identifier");
    }

    #[test]
    fn test_configuration_error_message() {
        let err = DomainError::Configuration {
            message: "support number must be E.164".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: support number must be E.164");
    }
}
