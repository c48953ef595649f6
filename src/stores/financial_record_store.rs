use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::financial_record::{self, ActiveModel, Entity as FinancialRecord};
use crate::types::db::partnership::Entity as Partnership;
use crate::types::dto::finance::CreateFinancialRecordRequest;

/// FinancialRecordStore manages the expense ledger per partnership
pub struct FinancialRecordStore {
    db: DatabaseConnection,
}

impl FinancialRecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record an expense against an existing partnership
    pub async fn create(
        &self,
        input: &CreateFinancialRecordRequest,
    ) -> Result<financial_record::Model, InternalError> {
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

        if input.amount < Decimal::ZERO {
            return Err(DomainError::Validation("amount must not be negative".to_string()).into());
        }

        let new_record = ActiveModel {
            partnership_id: Set(input.partnership_id),
            expense_type: Set(input.expense_type),
            amount: Set(input.amount.to_string()),
            description: Set(input.description.clone()),
            transaction_date: Set(input.transaction_date),
            receipt_url: Set(input.receipt_url.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_record
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_financial_record", e))
    }

    pub async fn list_for_partnership(
        &self,
        partnership_id: i32,
    ) -> Result<Vec<financial_record::Model>, InternalError> {
        FinancialRecord::find()
            .filter(financial_record::Column::PartnershipId.eq(partnership_id))
            .order_by_asc(financial_record::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_financial_records", e))
    }
}
