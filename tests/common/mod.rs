// Common test utilities for integration tests
#![allow(dead_code)]

use agripartner_backend::app_data::AppData;
use agripartner_backend::config::AppSettings;
use agripartner_backend::types::db::financial_record::ExpenseType;
use agripartner_backend::types::db::user::UserRole;
use agripartner_backend::types::db::{farm_plot, financial_record, partnership, user};
use agripartner_backend::types::dto::farming::CreateFarmPlotRequest;
use agripartner_backend::types::dto::finance::CreateFinancialRecordRequest;
use agripartner_backend::types::dto::partnerships::CreatePartnershipRequest;
use agripartner_backend::types::dto::users::RegisterUserRequest;
use chrono::{Duration, Utc};
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::Database;

/// Creates an in-memory test database with migrations applied and all
/// stores and services wired against it.
pub async fn setup_app() -> AppData {
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

    AppData::init(db, &settings)
}

/// Registers a user. Password hashing is exercised by the login tests;
/// everything else gets a fixed placeholder hash to keep test runs fast.
pub async fn register_user(app: &AppData, email: &str, role: UserRole) -> user::Model {
    let request = RegisterUserRequest {
        email: email.to_string(),
        phone: None,
        password: "a-long-password".to_string(),
        full_name: format!("User {}", email),
        role,
    };

    app.users
        .register(&request, "test-hash".to_string())
        .await
        .expect("Failed to register user")
}

pub async fn create_partner(app: &AppData, email: &str) -> user::Model {
    register_user(app, email, UserRole::Partner).await
}

pub async fn create_partnership(app: &AppData, partner_id: i32) -> partnership::Model {
    let now = Utc::now();

    app.partnerships
        .create(&CreatePartnershipRequest {
            partner_id,
            investment_amount: Decimal::from(100_000),
            start_date: now,
            end_date: now + Duration::days(180),
            estimated_return: Decimal::from(125_000),
        })
        .await
        .expect("Failed to create partnership")
}

pub async fn create_plot(app: &AppData, partnership_id: i32, area: &str) -> farm_plot::Model {
    app.farm_plots
        .create(&CreateFarmPlotRequest {
            partnership_id,
            plot_name: "North Field".to_string(),
            location_coordinates: r#"{"lat":-6.2088,"lng":106.8456}"#.to_string(),
            area_hectares: area.parse().expect("invalid test area"),
            soil_type: Some("loam".to_string()),
        })
        .await
        .expect("Failed to create farm plot")
}

pub async fn record_expense(
    app: &AppData,
    partnership_id: i32,
    expense_type: ExpenseType,
    amount: &str,
) -> financial_record::Model {
    app.financial_records
        .create(&CreateFinancialRecordRequest {
            partnership_id,
            expense_type,
            amount: amount.parse().expect("invalid test amount"),
            description: "test expense".to_string(),
            transaction_date: Utc::now(),
            receipt_url: None,
        })
        .await
        .expect("Failed to create financial record")
}
