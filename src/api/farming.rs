use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::{FarmActivityStore, FarmPlotStore};
use crate::types::dto::farming::{
    CreateFarmActivityRequest, CreateFarmPlotRequest, FarmActivityResponse, FarmPlotResponse,
};

/// Farm plot and activity endpoints
pub struct FarmingApi {
    farm_plots: Arc<FarmPlotStore>,
    farm_activities: Arc<FarmActivityStore>,
}

impl FarmingApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            farm_plots: app_data.farm_plots.clone(),
            farm_activities: app_data.farm_activities.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Farm management endpoints
    Farming,
}

#[OpenApi]
impl FarmingApi {
    /// Create a farm plot under a partnership
    #[oai(path = "/farm-plots", method = "post", tag = "ApiTags::Farming")]
    async fn create_plot(
        &self,
        body: Json<CreateFarmPlotRequest>,
    ) -> Result<Json<FarmPlotResponse>, ApiError> {
        let plot = self.farm_plots.create(&body.0).await?;

        Ok(Json(FarmPlotResponse::try_from(plot)?))
    }

    /// Log an activity on a farm plot
    #[oai(path = "/farm-activities", method = "post", tag = "ApiTags::Farming")]
    async fn create_activity(
        &self,
        body: Json<CreateFarmActivityRequest>,
    ) -> Result<Json<FarmActivityResponse>, ApiError> {
        let activity = self.farm_activities.create(&body.0).await?;

        Ok(Json(FarmActivityResponse::try_from(activity)?))
    }

    /// Activities on a plot, most recent activity date first
    #[oai(
        path = "/farm-plots/:farm_plot_id/activities",
        method = "get",
        tag = "ApiTags::Farming"
    )]
    async fn list_activities(
        &self,
        farm_plot_id: Path<i32>,
    ) -> Result<Json<Vec<FarmActivityResponse>>, ApiError> {
        let activities = self.farm_activities.list_for_plot(farm_plot_id.0).await?;

        let activities = activities
            .into_iter()
            .map(FarmActivityResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Json(activities))
    }
}
