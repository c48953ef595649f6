use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::community_event::{self, ActiveModel, Entity as CommunityEvent};
use crate::types::db::user::Entity as User;
use crate::types::dto::community::CreateCommunityEventRequest;

/// CommunityEventStore manages platform-wide events
pub struct CommunityEventStore {
    db: DatabaseConnection,
}

impl CommunityEventStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create an event organized by an existing user
    ///
    /// New events start with zero participants and are active.
    pub async fn create(
        &self,
        input: &CreateCommunityEventRequest,
    ) -> Result<community_event::Model, InternalError> {
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

        if input.fee < Decimal::ZERO {
            return Err(DomainError::Validation("fee must not be negative".to_string()).into());
        }

        if let Some(max) = input.max_participants {
            if max <= 0 {
                return Err(DomainError::Validation(
                    "max_participants must be positive".to_string(),
                )
                .into());
            }
        }

        let new_event = ActiveModel {
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            event_type: Set(input.event_type),
            event_date: Set(input.event_date),
            location: Set(input.location.clone()),
            fee: Set(input.fee.to_string()),
            max_participants: Set(input.max_participants),
            current_participants: Set(0),
            is_active: Set(true),
            created_by: Set(input.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_event
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_community_event", e))
    }

    /// Active events only, latest event date first.
    pub async fn list_active(&self) -> Result<Vec<community_event::Model>, InternalError> {
        CommunityEvent::find()
            .filter(community_event::Column::IsActive.eq(true))
            .order_by_desc(community_event::Column::EventDate)
            .order_by_desc(community_event::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_community_events", e))
    }
}
