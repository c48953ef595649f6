use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::notification::{self, ActiveModel, Entity as Notification};
use crate::types::db::user::Entity as User;
use crate::types::dto::notifications::CreateNotificationRequest;

/// NotificationStore manages per-user notifications
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a notification for an existing user
    pub async fn create(
        &self,
        input: &CreateNotificationRequest,
    ) -> Result<notification::Model, InternalError> {
        let user = User::find_by_id(input.user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user", e))?;

        if user.is_none() {
            return Err(DomainError::NotFound {
                entity: "user",
                id: input.user_id,
            }
            .into());
        }

        let new_notification = ActiveModel {
            user_id: Set(input.user_id),
            title: Set(input.title.clone()),
            message: Set(input.message.clone()),
            notification_type: Set(input.notification_type),
            is_read: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_notification
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_notification", e))
    }

    pub async fn list_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<notification::Model>, InternalError> {
        Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt)
            .order_by_desc(notification::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_notifications", e))
    }

    /// Most recent notifications for a user, limit applied in SQL.
    pub async fn recent_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<notification::Model>, InternalError> {
        Notification::find()
            .filter(notification::Column::UserId.eq(user_id))
            .order_by_desc(notification::Column::CreatedAt)
            .order_by_desc(notification::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("recent_notifications", e))
    }
}
