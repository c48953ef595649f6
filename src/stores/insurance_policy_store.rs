use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::insurance_policy::{self, ActiveModel, Entity as InsurancePolicy};
use crate::types::db::partnership::Entity as Partnership;
use crate::types::dto::insurance::CreateInsurancePolicyRequest;

/// InsurancePolicyStore manages coverage contracts per partnership
pub struct InsurancePolicyStore {
    db: DatabaseConnection,
}

impl InsurancePolicyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a policy under an existing partnership
    ///
    /// Duplicate policy numbers are caught by the unique constraint and
    /// reported as a Conflict.
    pub async fn create(
        &self,
        input: &CreateInsurancePolicyRequest,
    ) -> Result<insurance_policy::Model, InternalError> {
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

        if input.coverage_amount <= Decimal::ZERO {
            return Err(
                DomainError::Validation("coverage_amount must be positive".to_string()).into(),
            );
        }

        if input.premium_amount <= Decimal::ZERO {
            return Err(
                DomainError::Validation("premium_amount must be positive".to_string()).into(),
            );
        }

        let new_policy = ActiveModel {
            partnership_id: Set(input.partnership_id),
            policy_number: Set(input.policy_number.clone()),
            coverage_amount: Set(input.coverage_amount.to_string()),
            premium_amount: Set(input.premium_amount.to_string()),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            coverage_details: Set(input.coverage_details.clone()),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_policy.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::Conflict {
                    field: "policy_number",
                    value: input.policy_number.clone(),
                }
                .into()
            } else {
                InternalError::database("insert_insurance_policy", e)
            }
        })
    }

    pub async fn list_for_partnership(
        &self,
        partnership_id: i32,
    ) -> Result<Vec<insurance_policy::Model>, InternalError> {
        InsurancePolicy::find()
            .filter(insurance_policy::Column::PartnershipId.eq(partnership_id))
            .order_by_asc(insurance_policy::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_insurance_policies", e))
    }
}
