mod common;

use agripartner_backend::errors::{DomainError, InternalError};
use agripartner_backend::types::db::user::{Entity as User, UserRole};
use agripartner_backend::types::dto::users::RegisterUserRequest;
use sea_orm::EntityTrait;

fn request(email: &str, phone: Option<&str>) -> RegisterUserRequest {
    RegisterUserRequest {
        email: email.to_string(),
        phone: phone.map(str::to_string),
        password: "a-long-password".to_string(),
        full_name: "Test User".to_string(),
        role: UserRole::Farmer,
    }
}

#[tokio::test]
async fn new_users_are_unverified_and_active() {
    let app = common::setup_app().await;

    let user = app
        .users
        .register(&request("farmer@example.com", None), "hash".to_string())
        .await
        .unwrap();

    assert!(!user.is_verified);
    assert!(user.is_active);
    assert_eq!(user.role, UserRole::Farmer);
    assert_eq!(user.phone, None);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let app = common::setup_app().await;

    app.users
        .register(&request("farmer@example.com", None), "hash".to_string())
        .await
        .unwrap();

    let err = app
        .users
        .register(&request("farmer@example.com", None), "hash".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::Conflict { field: "email", .. })
    ));
}

#[tokio::test]
async fn duplicate_phone_is_a_conflict() {
    let app = common::setup_app().await;

    app.users
        .register(
            &request("first@example.com", Some("+6281234567890")),
            "hash".to_string(),
        )
        .await
        .unwrap();

    let err = app
        .users
        .register(
            &request("second@example.com", Some("+6281234567890")),
            "hash".to_string(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::Conflict { field: "phone", .. })
    ));
}

#[tokio::test]
async fn malformed_email_fails_validation_and_persists_nothing() {
    let app = common::setup_app().await;

    let err = app
        .users
        .register(&request("not-an-email", None), "hash".to_string())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::Validation(_))
    ));

    let rows = User::find().all(&app.db).await.unwrap();
    assert!(rows.is_empty());
}
