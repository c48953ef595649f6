use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, poem_openapi::Enum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
#[oai(rename_all = "snake_case")]
pub enum RiskType {
    #[sea_orm(string_value = "weather")]
    Weather,
    #[sea_orm(string_value = "pest")]
    Pest,
    #[sea_orm(string_value = "disease")]
    Disease,
    #[sea_orm(string_value = "flood")]
    Flood,
    #[sea_orm(string_value = "drought")]
    Drought,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "risk_alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farm_plot_id: i32,
    pub risk_type: RiskType,
    /// 1 (lowest) to 5 (highest).
    pub severity_level: i32,
    pub title: String,
    pub description: String,
    pub alert_date: DateTimeUtc,
    pub is_resolved: bool,
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
}

impl Related<super::farm_plot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FarmPlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
