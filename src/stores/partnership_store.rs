use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::partnership::{self, ActiveModel, Entity as Partnership, PartnershipStatus};
use crate::types::db::user::{Entity as User, UserRole};
use crate::types::dto::partnerships::CreatePartnershipRequest;

/// Label applied to a brand-new partnership.
const INITIAL_PHASE: &str = "planning";

/// PartnershipStore manages investment contracts
pub struct PartnershipStore {
    db: DatabaseConnection,
}

impl PartnershipStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a partnership for a partner-role user
    ///
    /// Pre-checks: the referenced user exists and has the partner role, both
    /// amounts are positive, and the date range is ordered. New partnerships
    /// start at progress 0 in the planning phase with pending status.
    pub async fn create(
        &self,
        input: &CreatePartnershipRequest,
    ) -> Result<partnership::Model, InternalError> {
        let partner = User::find_by_id(input.partner_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_partner", e))?
            .ok_or(DomainError::NotFound {
                entity: "partner",
                id: input.partner_id,
            })?;

        if partner.role != UserRole::Partner {
            return Err(DomainError::InvalidRole {
                user_id: input.partner_id,
                required: "partner",
            }
            .into());
        }

        if input.investment_amount <= Decimal::ZERO {
            return Err(
                DomainError::Validation("investment_amount must be positive".to_string()).into(),
            );
        }

        if input.estimated_return <= Decimal::ZERO {
            return Err(
                DomainError::Validation("estimated_return must be positive".to_string()).into(),
            );
        }

        if input.end_date <= input.start_date {
            return Err(
                DomainError::Validation("end_date must be after start_date".to_string()).into(),
            );
        }

        let now = Utc::now();
        let new_partnership = ActiveModel {
            partner_id: Set(input.partner_id),
            investment_amount: Set(input.investment_amount.to_string()),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            estimated_return: Set(input.estimated_return.to_string()),
            current_progress: Set(Decimal::ZERO.to_string()),
            current_phase: Set(INITIAL_PHASE.to_string()),
            status: Set(PartnershipStatus::Pending),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        new_partnership
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_partnership", e))
    }

    /// Oldest partnership owned by a partner, if any.
    ///
    /// A partner may own several rows; the dashboard addresses one per call
    /// and takes the first created. See DESIGN.md on the cardinality gap.
    pub async fn first_for_partner(
        &self,
        partner_id: i32,
    ) -> Result<Option<partnership::Model>, InternalError> {
        Partnership::find()
            .filter(partnership::Column::PartnerId.eq(partner_id))
            .order_by_asc(partnership::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("first_partnership_for_partner", e))
    }
}
