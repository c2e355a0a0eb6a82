use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ivr_core::errors::{DomainError, ValidationError};
use ivr_shared::types::error_codes;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Errors surfaced by webhook handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    InvalidForm(#[from] ValidationErrors),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(DomainError::Validation(error))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => domain_status(error),
            ApiError::InvalidForm(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::InvalidForm(errors) => validation_error_response(errors),
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    domain_error_body(error).to_response(domain_status(error))
}

fn domain_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn domain_error_body(error: &DomainError) -> ErrorResponse {
    match error {
        DomainError::Validation(ValidationError::RequiredField { field }) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, format!("Missing required field: {}", field))
                .add_detail("field", field)
        }
        DomainError::Validation(ValidationError::InvalidFormat { field }) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, format!("Invalid format for field: {}", field))
                .add_detail("field", field)
        }
        DomainError::Validation(ValidationError::InvalidLength { field, max, actual }) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, format!("Field {} is too long", field))
                .add_detail("field", field)
                .add_detail("max", max)
                .add_detail("actual", actual)
        }
        DomainError::Configuration { message } => {
            tracing::error!("Configuration error reached a request: {}", message);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    }
}

/// 400 response listing the failing form fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }
    response.to_response(StatusCode::BAD_REQUEST)
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_error_maps_to_bad_request() {
        let error = DomainError::Validation(ValidationError::RequiredField {
            field: "identifier".to_string(),
        });
        let response = handle_domain_error(&error);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["details"]["field"], "identifier");
    }

    #[actix_web::test]
    async fn test_configuration_error_hides_message() {
        let error = DomainError::Configuration {
            message: "support number must be E.164".to_string(),
        };
        let response = handle_domain_error(&error);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "internal_error");
        assert!(!json["message"].as_str().unwrap().contains("E.164"));
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }
}
