use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::risk_alert::{self, RiskType};

/// Request model for raising a risk alert
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateRiskAlertRequest {
    pub farm_plot_id: i32,

    pub risk_type: RiskType,

    /// Urgency ranking, 1 (lowest) to 5 (highest)
    pub severity_level: i32,

    pub title: String,

    pub description: String,

    pub alert_date: DateTime<Utc>,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RiskAlertResponse {
    pub id: i32,
    pub farm_plot_id: i32,
    pub risk_type: RiskType,
    pub severity_level: i32,
    pub title: String,
    pub description: String,
    pub alert_date: DateTime<Utc>,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<risk_alert::Model> for RiskAlertResponse {
    fn from(model: risk_alert::Model) -> Self {
        Self {
            id: model.id,
            farm_plot_id: model.farm_plot_id,
            risk_type: model.risk_type,
            severity_level: model.severity_level,
            title: model.title,
            description: model.description,
            alert_date: model.alert_date,
            is_resolved: model.is_resolved,
            created_at: model.created_at,
        }
    }
}
