use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::partnership::{self, PartnershipStatus};
use crate::types::dto::parse_decimal;

/// Request model for partnership creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreatePartnershipRequest {
    /// User that owns the partnership; must have the partner role
    pub partner_id: i32,

    /// Invested capital, must be positive
    pub investment_amount: Decimal,

    pub start_date: DateTime<Utc>,

    /// Must be after start_date
    pub end_date: DateTime<Utc>,

    /// Expected payout, must be positive
    pub estimated_return: Decimal,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct PartnershipResponse {
    pub id: i32,
    pub partner_id: i32,
    pub investment_amount: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub estimated_return: Decimal,
    /// Completion percentage, 0 to 100
    pub current_progress: Decimal,
    pub current_phase: String,
    pub status: PartnershipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<partnership::Model> for PartnershipResponse {
    type Error = InternalError;

    fn try_from(model: partnership::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            partner_id: model.partner_id,
            investment_amount: parse_decimal("investment_amount", &model.investment_amount)?,
            start_date: model.start_date,
            end_date: model.end_date,
            estimated_return: parse_decimal("estimated_return", &model.estimated_return)?,
            current_progress: parse_decimal("current_progress", &model.current_progress)?,
            current_phase: model.current_phase,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
