use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::farm_activity::{self, ActiveModel, Entity as FarmActivity};
use crate::types::db::farm_plot::Entity as FarmPlot;
use crate::types::db::user::{self, Entity as User};
use crate::types::dto::farming::CreateFarmActivityRequest;

/// FarmActivityStore manages the activity log per plot
pub struct FarmActivityStore {
    db: DatabaseConnection,
}

impl FarmActivityStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Log an activity on an existing plot, attributed to an existing user
    pub async fn create(
        &self,
        input: &CreateFarmActivityRequest,
    ) -> Result<farm_activity::Model, InternalError> {
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

        let creator = User::find_by_id(input.created_by)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_creator", e))?;

        if creator.is_none() {
            return Err(DomainError::NotFound {
                entity: "user",
                id: input.created_by,
            }
            .into());
        }

        let new_activity = ActiveModel {
            farm_plot_id: Set(input.farm_plot_id),
            activity_type: Set(input.activity_type),
            description: Set(input.description.clone()),
            activity_date: Set(input.activity_date),
            photos: Set(input.photos.as_ref().map(|urls| serde_json::json!(urls))),
            videos: Set(input.videos.as_ref().map(|urls| serde_json::json!(urls))),
            created_by: Set(input.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_activity
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_farm_activity", e))
    }

    /// All activities for one plot, most recent activity date first.
    pub async fn list_for_plot(
        &self,
        farm_plot_id: i32,
    ) -> Result<Vec<farm_activity::Model>, InternalError> {
        FarmActivity::find()
            .filter(farm_activity::Column::FarmPlotId.eq(farm_plot_id))
            .order_by_desc(farm_activity::Column::ActivityDate)
            .order_by_desc(farm_activity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_farm_activities", e))
    }

    /// Most recently logged activities across a set of plots, joined with
    /// the creator row, newest first. An empty plot set short-circuits.
    pub async fn recent_for_plots(
        &self,
        plot_ids: &[i32],
        limit: u64,
    ) -> Result<Vec<(farm_activity::Model, Option<user::Model>)>, InternalError> {
        if plot_ids.is_empty() {
            return Ok(Vec::new());
        }

        FarmActivity::find()
            .filter(farm_activity::Column::FarmPlotId.is_in(plot_ids.iter().copied()))
            .find_also_related(User)
            .order_by_desc(farm_activity::Column::CreatedAt)
            .order_by_desc(farm_activity::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("recent_farm_activities", e))
    }
}
