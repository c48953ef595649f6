use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::financial_record::{self, ExpenseType};
use crate::types::dto::parse_decimal;

/// Request model for recording an expense
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateFinancialRecordRequest {
    pub partnership_id: i32,

    pub expense_type: ExpenseType,

    /// Expense amount, never negative
    pub amount: Decimal,

    pub description: String,

    pub transaction_date: DateTime<Utc>,

    pub receipt_url: Option<String>,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FinancialRecordResponse {
    pub id: i32,
    pub partnership_id: i32,
    pub expense_type: ExpenseType,
    pub amount: Decimal,
    pub description: String,
    pub transaction_date: DateTime<Utc>,
    pub receipt_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<financial_record::Model> for FinancialRecordResponse {
    type Error = InternalError;

    fn try_from(model: financial_record::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            partnership_id: model.partnership_id,
            expense_type: model.expense_type,
            amount: parse_decimal("amount", &model.amount)?,
            description: model.description,
            transaction_date: model.transaction_date,
            receipt_url: model.receipt_url,
            created_at: model.created_at,
        })
    }
}

/// Full financial summary for a partnership
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FinancialSummaryResponse {
    /// Sum of all recorded expenses
    pub total_expenses: Decimal,

    /// Expense type to summed amount; only types with records appear
    pub expense_breakdown: BTreeMap<String, Decimal>,

    /// Planning constant, tons per hectare
    pub estimated_yield: Decimal,

    /// Planning constant, currency per ton
    pub current_market_price: Decimal,

    /// total plot area x estimated yield x market price
    pub projected_revenue: Decimal,
}
