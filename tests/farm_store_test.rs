mod common;

use agripartner_backend::errors::{DomainError, InternalError};
use agripartner_backend::types::db::farm_plot::Entity as FarmPlot;
use agripartner_backend::types::db::farm_activity::ActivityType;
use agripartner_backend::types::dto::farming::{
    CreateFarmActivityRequest, CreateFarmPlotRequest, FarmActivityResponse, FarmPlotResponse,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;

#[tokio::test]
async fn plot_area_round_trips_exactly() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    common::create_plot(&app, partnership.id, "10.1234").await;

    let plots = app
        .farm_plots
        .list_for_partnership(partnership.id)
        .await
        .unwrap();
    assert_eq!(plots.len(), 1);

    let response = FarmPlotResponse::try_from(plots[0].clone()).unwrap();
    assert_eq!(
        response.area_hectares,
        "10.1234".parse::<Decimal>().unwrap()
    );
}

#[tokio::test]
async fn plot_requires_an_existing_partnership() {
    let app = common::setup_app().await;

    let err = app
        .farm_plots
        .create(&CreateFarmPlotRequest {
            partnership_id: 777,
            plot_name: "Ghost Field".to_string(),
            location_coordinates: "{}".to_string(),
            area_hectares: Decimal::ONE,
            soil_type: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound {
            entity: "partnership",
            id: 777
        })
    ));

    let rows = FarmPlot::find().all(&app.db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn plot_area_must_be_positive() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    let err = app
        .farm_plots
        .create(&CreateFarmPlotRequest {
            partnership_id: partnership.id,
            plot_name: "Zero Field".to_string(),
            location_coordinates: "{}".to_string(),
            area_hectares: Decimal::ZERO,
            soil_type: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InternalError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn activity_requires_plot_and_creator() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let plot = common::create_plot(&app, partnership.id, "2.0").await;

    let request = CreateFarmActivityRequest {
        farm_plot_id: 999,
        activity_type: ActivityType::Planting,
        description: "planted maize".to_string(),
        activity_date: Utc::now(),
        photos: None,
        videos: None,
        created_by: partner.id,
    };

    let err = app.farm_activities.create(&request).await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound {
            entity: "farm plot",
            id: 999
        })
    ));

    let request = CreateFarmActivityRequest {
        farm_plot_id: plot.id,
        created_by: 999,
        ..request
    };

    let err = app.farm_activities.create(&request).await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Domain(DomainError::NotFound {
            entity: "user",
            id: 999
        })
    ));
}

#[tokio::test]
async fn activity_media_urls_round_trip() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let plot = common::create_plot(&app, partnership.id, "2.0").await;

    let activity = app
        .farm_activities
        .create(&CreateFarmActivityRequest {
            farm_plot_id: plot.id,
            activity_type: ActivityType::Fertilizing,
            description: "applied npk".to_string(),
            activity_date: Utc::now(),
            photos: Some(vec![
                "https://cdn.example.com/a.jpg".to_string(),
                "https://cdn.example.com/b.jpg".to_string(),
            ]),
            videos: None,
            created_by: partner.id,
        })
        .await
        .unwrap();

    let response = FarmActivityResponse::try_from(activity).unwrap();
    assert_eq!(
        response.photos,
        Some(vec![
            "https://cdn.example.com/a.jpg".to_string(),
            "https://cdn.example.com/b.jpg".to_string(),
        ])
    );
    assert_eq!(response.videos, None);
}

#[tokio::test]
async fn activities_are_listed_by_activity_date_descending() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;
    let plot = common::create_plot(&app, partnership.id, "2.0").await;

    let base = Utc::now();
    // Inserted out of chronological order on purpose.
    for (label, offset_days) in [("middle", 5), ("oldest", 1), ("newest", 9)] {
        app.farm_activities
            .create(&CreateFarmActivityRequest {
                farm_plot_id: plot.id,
                activity_type: ActivityType::Watering,
                description: label.to_string(),
                activity_date: base + Duration::days(offset_days),
                photos: None,
                videos: None,
                created_by: partner.id,
            })
            .await
            .unwrap();
    }

    let activities = app.farm_activities.list_for_plot(plot.id).await.unwrap();
    let labels: Vec<&str> = activities.iter().map(|a| a.description.as_str()).collect();

    assert_eq!(labels, vec!["newest", "middle", "oldest"]);
}
