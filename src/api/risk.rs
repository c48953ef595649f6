use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::RiskAlertStore;
use crate::types::dto::risk::{CreateRiskAlertRequest, RiskAlertResponse};

/// Risk alert endpoints
pub struct RiskApi {
    risk_alerts: Arc<RiskAlertStore>,
}

impl RiskApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            risk_alerts: app_data.risk_alerts.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Risk endpoints
    Risk,
}

#[OpenApi]
impl RiskApi {
    /// Raise a risk alert on a farm plot
    #[oai(path = "/risk-alerts", method = "post", tag = "ApiTags::Risk")]
    async fn create(
        &self,
        body: Json<CreateRiskAlertRequest>,
    ) -> Result<Json<RiskAlertResponse>, ApiError> {
        let alert = self.risk_alerts.create(&body.0).await?;

        Ok(Json(RiskAlertResponse::from(alert)))
    }

    /// Alerts across the platform or for one plot, most severe first
    #[oai(path = "/risk-alerts", method = "get", tag = "ApiTags::Risk")]
    async fn list(
        &self,
        farm_plot_id: Query<Option<i32>>,
    ) -> Result<Json<Vec<RiskAlertResponse>>, ApiError> {
        let alerts = self.risk_alerts.list(farm_plot_id.0).await?;

        Ok(Json(alerts.into_iter().map(RiskAlertResponse::from).collect()))
    }
}
