use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::farm_plot::{self, ActiveModel, Entity as FarmPlot};
use crate::types::db::partnership::Entity as Partnership;
use crate::types::dto::farming::CreateFarmPlotRequest;

/// FarmPlotStore manages land units tied to partnerships
pub struct FarmPlotStore {
    db: DatabaseConnection,
}

impl FarmPlotStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a plot under an existing partnership
    pub async fn create(
        &self,
        input: &CreateFarmPlotRequest,
    ) -> Result<farm_plot::Model, InternalError> {
        let partnership = Partnership::find_by_id(input.partnership_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_partnership", e))?;

        if partnership.is_none() {
            return Err(DomainError::NotFound {
                entity: "partnership",
                id: input.partnership_id,
            }
            .into());
        }

        if input.area_hectares <= Decimal::ZERO {
            return Err(
                DomainError::Validation("area_hectares must be positive".to_string()).into(),
            );
        }

        let now = Utc::now();
        let new_plot = ActiveModel {
            partnership_id: Set(input.partnership_id),
            plot_name: Set(input.plot_name.clone()),
            location_coordinates: Set(input.location_coordinates.clone()),
            area_hectares: Set(input.area_hectares.to_string()),
            soil_type: Set(input.soil_type.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        new_plot
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_farm_plot", e))
    }

    pub async fn list_for_partnership(
        &self,
        partnership_id: i32,
    ) -> Result<Vec<farm_plot::Model>, InternalError> {
        FarmPlot::find()
            .filter(farm_plot::Column::PartnershipId.eq(partnership_id))
            .order_by_asc(farm_plot::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_farm_plots", e))
    }
}
