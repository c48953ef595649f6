use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::farm_activity::{self, ActivityType};
use crate::types::db::farm_plot;
use crate::types::dto::{parse_decimal, urls_from_json};

/// Request model for farm plot creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateFarmPlotRequest {
    pub partnership_id: i32,

    pub plot_name: String,

    /// Coordinate pair; validated by the caller, stored opaquely
    pub location_coordinates: String,

    /// Plot area in hectares, must be positive
    pub area_hectares: Decimal,

    pub soil_type: Option<String>,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FarmPlotResponse {
    pub id: i32,
    pub partnership_id: i32,
    pub plot_name: String,
    pub location_coordinates: String,
    pub area_hectares: Decimal,
    pub soil_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<farm_plot::Model> for FarmPlotResponse {
    type Error = InternalError;

    fn try_from(model: farm_plot::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            partnership_id: model.partnership_id,
            plot_name: model.plot_name,
            location_coordinates: model.location_coordinates,
            area_hectares: parse_decimal("area_hectares", &model.area_hectares)?,
            soil_type: model.soil_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Request model for logging a farm activity
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateFarmActivityRequest {
    pub farm_plot_id: i32,

    pub activity_type: ActivityType,

    pub description: String,

    pub activity_date: DateTime<Utc>,

    /// Photo URLs documenting the activity
    pub photos: Option<Vec<String>>,

    /// Video URLs documenting the activity
    pub videos: Option<Vec<String>>,

    /// User that performed or recorded the activity
    pub created_by: i32,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FarmActivityResponse {
    pub id: i32,
    pub farm_plot_id: i32,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: DateTime<Utc>,
    pub photos: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<farm_activity::Model> for FarmActivityResponse {
    type Error = InternalError;

    fn try_from(model: farm_activity::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            farm_plot_id: model.farm_plot_id,
            activity_type: model.activity_type,
            description: model.description,
            activity_date: model.activity_date,
            photos: urls_from_json("photos", model.photos)?,
            videos: urls_from_json("videos", model.videos)?,
            created_by: model.created_by,
            created_at: model.created_at,
        })
    }
}
