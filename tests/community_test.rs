mod common;

use agripartner_backend::errors::{DomainError, InternalError};
use agripartner_backend::types::db::community_event::{self, EventType};
use agripartner_backend::types::db::user::UserRole;
use agripartner_backend::types::dto::community::CreateCommunityEventRequest;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};

fn request(created_by: i32, title: &str, fee: Decimal) -> CreateCommunityEventRequest {
    CreateCommunityEventRequest {
        title: title.to_string(),
        description: "come join us".to_string(),
        event_type: EventType::Workshop,
        event_date: Utc::now() + Duration::days(14),
        location: "community hall".to_string(),
        fee,
        max_participants: None,
        created_by,
    }
}

#[tokio::test]
async fn free_open_events_get_the_documented_defaults() {
    let app = common::setup_app().await;
    let organizer = common::register_user(&app, "mgmt@example.com", UserRole::Management).await;

    let event = app
        .community_events
        .create(&request(organizer.id, "open day", Decimal::ZERO))
        .await
        .unwrap();

    assert_eq!(event.max_participants, None);
    assert_eq!(event.current_participants, 0);
    assert!(event.is_active);
    assert_eq!(event.fee.parse::<Decimal>().unwrap(), Decimal::ZERO);
}

#[tokio::test]
async fn negative_fee_and_non_positive_cap_are_rejected() {
    let app = common::setup_app().await;
    let organizer = common::register_user(&app, "mgmt@example.com", UserRole::Management).await;

    let err = app
        .community_events
        .create(&request(organizer.id, "bad fee", Decimal::from(-10)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InternalError::Domain(DomainError::Validation(_))
    ));

    let mut capped = request(organizer.id, "bad cap", Decimal::ZERO);
    capped.max_participants = Some(0);

    let err = app.community_events.create(&capped).await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn missing_organizer_is_not_found() {
    let app = common::setup_app().await;

    let err = app
        .community_events
        .create(&request(999, "ghost event", Decimal::ZERO))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound { entity: "user", .. })
    ));
}

#[tokio::test]
async fn listing_returns_active_events_latest_date_first() {
    let app = common::setup_app().await;
    let organizer = common::register_user(&app, "mgmt@example.com", UserRole::Management).await;

    let mut sooner = request(organizer.id, "sooner", Decimal::ZERO);
    sooner.event_date = Utc::now() + Duration::days(7);
    app.community_events.create(&sooner).await.unwrap();

    let mut later = request(organizer.id, "later", Decimal::ZERO);
    later.event_date = Utc::now() + Duration::days(30);
    app.community_events.create(&later).await.unwrap();

    let cancelled = app
        .community_events
        .create(&request(organizer.id, "cancelled", Decimal::ZERO))
        .await
        .unwrap();

    // Deactivate one event directly; there is no deactivation handler.
    let mut cancelled: community_event::ActiveModel = cancelled.into();
    cancelled.is_active = Set(false);
    cancelled.update(&app.db).await.unwrap();

    let events = app.community_events.list_active().await.unwrap();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();

    assert_eq!(titles, vec!["later", "sooner"]);
}
