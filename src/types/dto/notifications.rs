use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::notification::{self, NotificationType};

/// Request model for notification creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<notification::Model> for NotificationResponse {
    fn from(model: notification::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            message: model.message,
            notification_type: model.notification_type,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
