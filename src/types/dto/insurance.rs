use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::insurance_policy;
use crate::types::dto::parse_decimal;

/// Request model for insurance policy creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateInsurancePolicyRequest {
    pub partnership_id: i32,

    /// Unique policy number
    pub policy_number: String,

    /// Covered amount, must be positive
    pub coverage_amount: Decimal,

    /// Premium, must be positive
    pub premium_amount: Decimal,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    pub coverage_details: String,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct InsurancePolicyResponse {
    pub id: i32,
    pub partnership_id: i32,
    pub policy_number: String,
    pub coverage_amount: Decimal,
    pub premium_amount: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub coverage_details: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<insurance_policy::Model> for InsurancePolicyResponse {
    type Error = InternalError;

    fn try_from(model: insurance_policy::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            partnership_id: model.partnership_id,
            policy_number: model.policy_number,
            coverage_amount: parse_decimal("coverage_amount", &model.coverage_amount)?,
            premium_amount: parse_decimal("premium_amount", &model.premium_amount)?,
            start_date: model.start_date,
            end_date: model.end_date,
            coverage_details: model.coverage_details,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
