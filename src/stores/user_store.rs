use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::user::{self, ActiveModel, Entity as User};
use crate::types::dto::users::RegisterUserRequest;

/// UserStore manages platform accounts
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new user
    ///
    /// The password arrives already hashed. Duplicate email or phone fails
    /// with a Conflict before the insert is attempted; a malformed email
    /// fails validation.
    ///
    /// # Returns
    /// * `Ok(Model)` - The created user including generated id and timestamps
    /// * `Err(InternalError)` - Conflict, Validation, or database error
    pub async fn register(
        &self,
        input: &RegisterUserRequest,
        password_hash: String,
    ) -> Result<user::Model, InternalError> {
        if !is_valid_email(&input.email) {
            return Err(DomainError::Validation(format!(
                "malformed email address: {}",
                input.email
            ))
            .into());
        }

        let existing = User::find()
            .filter(user::Column::Email.eq(&input.email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))?;

        if existing.is_some() {
            return Err(DomainError::Conflict {
                field: "email",
                value: input.email.clone(),
            }
            .into());
        }

        if let Some(phone) = &input.phone {
            let existing = User::find()
                .filter(user::Column::Phone.eq(phone))
                .one(&self.db)
                .await
                .map_err(|e| InternalError::database("find_user_by_phone", e))?;

            if existing.is_some() {
                return Err(DomainError::Conflict {
                    field: "phone",
                    value: phone.clone(),
                }
                .into());
            }
        }

        let now = Utc::now();
        let new_user = ActiveModel {
            email: Set(input.email.clone()),
            phone: Set(input.phone.clone()),
            password_hash: Set(password_hash),
            full_name: Set(input.full_name.clone()),
            role: Set(input.role),
            is_verified: Set(false),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        new_user
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_user", e))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

}

/// Structural email check; full deliverability is not this layer's problem.
fn is_valid_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
