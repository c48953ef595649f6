use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::services::PasswordService;
use crate::stores::UserStore;
use crate::types::dto::users::{LoginRequest, RegisterUserRequest, UserResponse};

/// Registration and login endpoints
pub struct UsersApi {
    users: Arc<UserStore>,
    passwords: Arc<PasswordService>,
}

impl UsersApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            users: app_data.users.clone(),
            passwords: app_data.passwords.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Account endpoints
    Users,
}

#[OpenApi(prefix_path = "/users")]
impl UsersApi {
    /// Register a new user account
    #[oai(path = "/register", method = "post", tag = "ApiTags::Users")]
    async fn register(
        &self,
        body: Json<RegisterUserRequest>,
    ) -> Result<Json<UserResponse>, ApiError> {
        self.passwords.validate(&body.password)?;
        let password_hash = self.passwords.hash(&body.password)?;

        let user = self.users.register(&body.0, password_hash).await?;

        Ok(Json(UserResponse::from(user)))
    }

    /// Log in with email and password
    ///
    /// Returns the user on success and `null` otherwise. Unknown emails,
    /// inactive accounts, and wrong passwords are indistinguishable in the
    /// response.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Users")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<Option<UserResponse>>, ApiError> {
        let Some(user) = self.users.find_by_email(&body.email).await? else {
            return Ok(Json(None));
        };

        if !user.is_active {
            return Ok(Json(None));
        }

        if !self.passwords.verify(&body.password, &user.password_hash) {
            return Ok(Json(None));
        }

        Ok(Json(Some(UserResponse::from(user))))
    }
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};

    use super::*;
    use crate::config::AppSettings;
    use crate::types::db::user::{self, UserRole};

    async fn setup_api() -> (DatabaseConnection, UsersApi) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let settings = AppSettings {
            database_url: String::new(),
            bind_addr: String::new(),
            market: Default::default(),
        };

        let api = UsersApi::new(&AppData::init(db.clone(), &settings));

        (db, api)
    }

    fn register_request(email: &str) -> Json<RegisterUserRequest> {
        Json(RegisterUserRequest {
            email: email.to_string(),
            phone: None,
            password: "a-long-password".to_string(),
            full_name: "Test Partner".to_string(),
            role: UserRole::Partner,
        })
    }

    #[tokio::test]
    async fn register_then_login_returns_the_user() {
        let (_db, api) = setup_api().await;

        let registered = api
            .register(register_request("partner@example.com"))
            .await
            .unwrap();
        assert_eq!(registered.email, "partner@example.com");

        let login = api
            .login(Json(LoginRequest {
                email: "partner@example.com".to_string(),
                password: "a-long-password".to_string(),
            }))
            .await
            .unwrap();

        let user = login.0.expect("expected a user");
        assert_eq!(user.id, registered.id);
        assert_eq!(user.role, UserRole::Partner);
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_absent() {
        let (_db, api) = setup_api().await;
        api.register(register_request("partner@example.com"))
            .await
            .unwrap();

        let login = api
            .login(Json(LoginRequest {
                email: "partner@example.com".to_string(),
                password: "not-the-password".to_string(),
            }))
            .await
            .unwrap();

        assert!(login.0.is_none());
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_absent() {
        let (_db, api) = setup_api().await;

        let login = api
            .login(Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "whatever-password".to_string(),
            }))
            .await
            .unwrap();

        assert!(login.0.is_none());
    }

    #[tokio::test]
    async fn login_with_inactive_account_is_absent() {
        let (db, api) = setup_api().await;
        api.register(register_request("partner@example.com"))
            .await
            .unwrap();

        let stored = user::Entity::find()
            .one(&db)
            .await
            .unwrap()
            .expect("expected a stored user");
        let mut stored: user::ActiveModel = stored.into();
        stored.is_active = Set(false);
        stored.update(&db).await.unwrap();

        let login = api
            .login(Json(LoginRequest {
                email: "partner@example.com".to_string(),
                password: "a-long-password".to_string(),
            }))
            .await
            .unwrap();

        assert!(login.0.is_none());
    }

    #[tokio::test]
    async fn register_rejects_short_passwords() {
        let (_db, api) = setup_api().await;

        let mut request = register_request("partner@example.com");
        request.0.password = "short".to_string();

        let result = api.register(request).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let (_db, api) = setup_api().await;
        api.register(register_request("partner@example.com"))
            .await
            .unwrap();

        let result = api.register(register_request("partner@example.com")).await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }
}
