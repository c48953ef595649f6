use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user::{self, UserRole};

/// Request model for user registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    /// Email address, unique across the platform
    pub email: String,

    /// Optional phone number, unique when present
    pub phone: Option<String>,

    /// Plaintext password, minimum 8 characters
    pub password: String,

    /// Full display name
    pub full_name: String,

    /// Platform role
    pub role: UserRole,
}

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user as returned by the API. The password hash never leaves the server.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub phone: Option<String>,
    pub full_name: String,
    pub role: UserRole,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            phone: model.phone,
            full_name: model.full_name,
            role: model.role,
            is_verified: model.is_verified,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
