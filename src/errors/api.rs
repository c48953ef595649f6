use poem_openapi::{payload::Json, ApiResponse};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::dto::common::ErrorResponse;

/// Error surface shared by all endpoints.
///
/// Domain errors keep their message content; infrastructure failures are
/// logged and collapsed into a generic 500 body.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// A referenced entity does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// The referenced user lacks the role required for the operation
    #[oai(status = 400)]
    InvalidRole(Json<ErrorResponse>),

    /// Input fails a declared constraint
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Uniqueness violation
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    Internal(Json<ErrorResponse>),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: message.into(),
            status_code: 404,
        }))
    }

    pub fn invalid_role(message: impl Into<String>) -> Self {
        ApiError::InvalidRole(Json(ErrorResponse {
            error: "invalid_role".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(Json(ErrorResponse {
            error: "conflict".to_string(),
            message: message.into(),
            status_code: 409,
        }))
    }

    pub fn internal() -> Self {
        ApiError::Internal(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "Internal server error".to_string(),
            status_code: 500,
        }))
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        match err {
            InternalError::Domain(domain) => match domain {
                DomainError::NotFound { .. } | DomainError::NoPartnership { .. } => {
                    ApiError::not_found(domain.to_string())
                }
                DomainError::InvalidRole { .. } => ApiError::invalid_role(domain.to_string()),
                DomainError::Conflict { .. } => ApiError::conflict(domain.to_string()),
                DomainError::Validation(_) => ApiError::validation(domain.to_string()),
            },
            other => {
                tracing::error!(error = ?other, "request failed with internal error");
                ApiError::internal()
            }
        }
    }
}
