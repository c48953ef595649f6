mod common;

use agripartner_backend::errors::{DomainError, InternalError};
use agripartner_backend::types::db::risk_alert::{Entity as RiskAlert, RiskType};
use agripartner_backend::types::dto::risk::CreateRiskAlertRequest;
use chrono::Utc;
use sea_orm::EntityTrait;

fn request(farm_plot_id: i32, severity_level: i32, title: &str) -> CreateRiskAlertRequest {
    CreateRiskAlertRequest {
        farm_plot_id,
        risk_type: RiskType::Pest,
        severity_level,
        title: title.to_string(),
        description: "observed in the field".to_string(),
        alert_date: Utc::now(),
    }
}

#[tokio::test]
async fn alerts_order_by_severity_then_recency() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let plot = common::create_plot(&app, partnership.id, "2.0").await;

    app.risk_alerts
        .create(&request(plot.id, 3, "older minor"))
        .await
        .unwrap();
    app.risk_alerts
        .create(&request(plot.id, 3, "newer minor"))
        .await
        .unwrap();
    app.risk_alerts
        .create(&request(plot.id, 5, "critical"))
        .await
        .unwrap();

    let alerts = app.risk_alerts.list(None).await.unwrap();
    let titles: Vec<&str> = alerts.iter().map(|a| a.title.as_str()).collect();

    assert_eq!(titles, vec!["critical", "newer minor", "older minor"]);
}

#[tokio::test]
async fn list_can_filter_on_one_plot() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let first_plot = common::create_plot(&app, partnership.id, "2.0").await;
    let second_plot = common::create_plot(&app, partnership.id, "3.0").await;

    app.risk_alerts
        .create(&request(first_plot.id, 2, "on first"))
        .await
        .unwrap();
    app.risk_alerts
        .create(&request(second_plot.id, 4, "on second"))
        .await
        .unwrap();

    let alerts = app.risk_alerts.list(Some(first_plot.id)).await.unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].title, "on first");
}

#[tokio::test]
async fn severity_outside_one_to_five_fails_and_persists_nothing() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let plot = common::create_plot(&app, partnership.id, "2.0").await;

    for severity in [0, 6, -1] {
        let err = app
            .risk_alerts
            .create(&request(plot.id, severity, "out of range"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InternalError::Domain(DomainError::Validation(_))
        ));
    }

    let rows = RiskAlert::find().all(&app.db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn missing_plot_is_not_found() {
    let app = common::setup_app().await;

    let err = app
        .risk_alerts
        .create(&request(31337, 3, "nowhere"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound {
            entity: "farm plot",
            ..
        })
    ));
}

#[tokio::test]
async fn new_alerts_start_unresolved() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let plot = common::create_plot(&app, partnership.id, "2.0").await;

    let alert = app
        .risk_alerts
        .create(&request(plot.id, 1, "minor"))
        .await
        .unwrap();

    assert!(!alert.is_resolved);
}
