use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::NotificationStore;
use crate::types::dto::notifications::{CreateNotificationRequest, NotificationResponse};

/// Notification endpoints
pub struct NotificationsApi {
    notifications: Arc<NotificationStore>,
}

impl NotificationsApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            notifications: app_data.notifications.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Notification endpoints
    Notifications,
}

#[OpenApi]
impl NotificationsApi {
    /// Create a notification for a user
    #[oai(path = "/notifications", method = "post", tag = "ApiTags::Notifications")]
    async fn create(
        &self,
        body: Json<CreateNotificationRequest>,
    ) -> Result<Json<NotificationResponse>, ApiError> {
        let notification = self.notifications.create(&body.0).await?;

        Ok(Json(NotificationResponse::from(notification)))
    }

    /// A user's notifications, newest first
    #[oai(
        path = "/users/:user_id/notifications",
        method = "get",
        tag = "ApiTags::Notifications"
    )]
    async fn list_for_user(
        &self,
        user_id: Path<i32>,
    ) -> Result<Json<Vec<NotificationResponse>>, ApiError> {
        let notifications = self.notifications.list_for_user(user_id.0).await?;

        Ok(Json(
            notifications
                .into_iter()
                .map(NotificationResponse::from)
                .collect(),
        ))
    }
}
