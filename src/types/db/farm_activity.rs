use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
pub enum ActivityType {
    #[sea_orm(string_value = "planting")]
    Planting,
    #[sea_orm(string_value = "fertilizing")]
    Fertilizing,
    #[sea_orm(string_value = "watering")]
    Watering,
    #[sea_orm(string_value = "pest_control")]
    PestControl,
    #[sea_orm(string_value = "harvesting")]
    Harvesting,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "farm_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farm_plot_id: i32,
    pub activity_type: ActivityType,
    pub description: String,
    pub activity_date: DateTimeUtc,
    /// JSON arrays of media URLs, NULL when none were attached.
    pub photos: Option<Json>,
    pub videos: Option<Json>,
    pub created_by: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farm_plot::Entity",
        from = "Column::FarmPlotId",
        to = "super::farm_plot::Column::Id"
    )]
    FarmPlot,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id"
    )]
    Creator,
}

impl Related<super::farm_plot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FarmPlot.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
