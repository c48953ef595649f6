use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::services::DashboardService;
use crate::types::dto::dashboard::PartnerDashboardResponse;

/// Partner dashboard endpoint
pub struct DashboardApi {
    dashboard: Arc<DashboardService>,
}

impl DashboardApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            dashboard: app_data.dashboard.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Dashboard endpoints
    Dashboard,
}

#[OpenApi]
impl DashboardApi {
    /// Everything a partner sees on their dashboard, in one response
    #[oai(
        path = "/partners/:partner_id/dashboard",
        method = "get",
        tag = "ApiTags::Dashboard"
    )]
    async fn partner_dashboard(
        &self,
        partner_id: Path<i32>,
    ) -> Result<Json<PartnerDashboardResponse>, ApiError> {
        let dashboard = self.dashboard.partner_dashboard(partner_id.0).await?;

        Ok(Json(dashboard))
    }
}
