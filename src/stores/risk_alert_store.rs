use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::farm_plot::Entity as FarmPlot;
use crate::types::db::risk_alert::{self, ActiveModel, Entity as RiskAlert};
use crate::types::dto::risk::CreateRiskAlertRequest;

const SEVERITY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// RiskAlertStore manages per-plot risk alerts
pub struct RiskAlertStore {
    db: DatabaseConnection,
}

impl RiskAlertStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Raise an alert on an existing plot
    pub async fn create(
        &self,
        input: &CreateRiskAlertRequest,
    ) -> Result<risk_alert::Model, InternalError> {
        let plot = FarmPlot::find_by_id(input.farm_plot_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_farm_plot", e))?;

        if plot.is_none() {
            return Err(DomainError::NotFound {
                entity: "farm plot",
                id: input.farm_plot_id,
            }
            .into());
        }

        if !SEVERITY_RANGE.contains(&input.severity_level) {
            return Err(DomainError::Validation(
                "severity_level must be between 1 and 5".to_string(),
            )
            .into());
        }

        let new_alert = ActiveModel {
            farm_plot_id: Set(input.farm_plot_id),
            risk_type: Set(input.risk_type),
            severity_level: Set(input.severity_level),
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            alert_date: Set(input.alert_date),
            is_resolved: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_alert
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_risk_alert", e))
    }

    /// Alerts across the platform or for one plot, most severe first and
    /// newest first within a severity level.
    pub async fn list(
        &self,
        farm_plot_id: Option<i32>,
    ) -> Result<Vec<risk_alert::Model>, InternalError> {
        let mut query = RiskAlert::find();

        if let Some(plot_id) = farm_plot_id {
            query = query.filter(risk_alert::Column::FarmPlotId.eq(plot_id));
        }

        query
            .order_by_desc(risk_alert::Column::SeverityLevel)
            .order_by_desc(risk_alert::Column::CreatedAt)
            .order_by_desc(risk_alert::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_risk_alerts", e))
    }

    /// All alerts across a set of plots, newest first. An empty plot set
    /// short-circuits.
    pub async fn list_for_plots(
        &self,
        plot_ids: &[i32],
    ) -> Result<Vec<risk_alert::Model>, InternalError> {
        if plot_ids.is_empty() {
            return Ok(Vec::new());
        }

        RiskAlert::find()
            .filter(risk_alert::Column::FarmPlotId.is_in(plot_ids.iter().copied()))
            .order_by_desc(risk_alert::Column::CreatedAt)
            .order_by_desc(risk_alert::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_risk_alerts_for_plots", e))
    }
}
