use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::farm_activity::{self, ActivityType};
use crate::types::db::user;
use crate::types::dto::farming::FarmPlotResponse;
use crate::types::dto::notifications::NotificationResponse;
use crate::types::dto::partnerships::PartnershipResponse;
use crate::types::dto::risk::RiskAlertResponse;
use crate::types::dto::urls_from_json;

/// A recent activity entry on the dashboard, joined with its creator.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RecentActivityResponse {
    pub id: i32,
    pub farm_plot_id: i32,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: DateTime<Utc>,
    pub photos: Option<Vec<String>>,
    pub videos: Option<Vec<String>>,
    pub created_by: i32,
    /// Full name of the creator, when the joined row still exists
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RecentActivityResponse {
    pub fn from_parts(
        activity: farm_activity::Model,
        creator: Option<user::Model>,
    ) -> Result<Self, InternalError> {
        Ok(Self {
            id: activity.id,
            farm_plot_id: activity.farm_plot_id,
            activity_type: activity.activity_type,
            description: activity.description,
            activity_date: activity.activity_date,
            photos: urls_from_json("photos", activity.photos)?,
            videos: urls_from_json("videos", activity.videos)?,
            created_by: activity.created_by,
            created_by_name: creator.map(|u| u.full_name),
            created_at: activity.created_at,
        })
    }
}

/// The expense subset of the financial summary shown on the dashboard.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DashboardFinancialSummary {
    pub total_expenses: Decimal,

    /// Expense type to summed amount; only types with records appear
    pub expense_breakdown: BTreeMap<String, Decimal>,
}

/// Everything a partner sees on their dashboard, assembled in one response.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PartnerDashboardResponse {
    pub partnership: PartnershipResponse,
    pub farm_plots: Vec<FarmPlotResponse>,
    /// At most the 10 most recently logged activities across all plots
    pub recent_activities: Vec<RecentActivityResponse>,
    pub financial_summary: DashboardFinancialSummary,
    /// At most the 20 most recent notifications
    pub notifications: Vec<NotificationResponse>,
    pub risk_alerts: Vec<RiskAlertResponse>,
}
