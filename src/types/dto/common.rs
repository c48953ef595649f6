use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Standardized error body returned by every endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Response model for the health endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Running package version
    pub version: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}
