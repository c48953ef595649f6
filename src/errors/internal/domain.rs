use thiserror::Error;

/// Domain rule violations detected by store pre-checks.
///
/// These fail fast before any row is written; uniqueness conflicts may also
/// surface here from the store's own constraint enforcement.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("no partnership for partner {partner_id}")]
    NoPartnership { partner_id: i32 },

    #[error("user {user_id} does not have the {required} role")]
    InvalidRole {
        user_id: i32,
        required: &'static str,
    },

    #[error("{field} already in use: {value}")]
    Conflict { field: &'static str, value: String },

    #[error("{0}")]
    Validation(String),
}
