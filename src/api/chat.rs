use std::sync::Arc;

use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::ChatMessageStore;
use crate::types::dto::chat::{ChatMessageResponse, SendChatMessageRequest};

/// Direct message endpoints
pub struct ChatApi {
    chat_messages: Arc<ChatMessageStore>,
}

impl ChatApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            chat_messages: app_data.chat_messages.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Chat endpoints
    Chat,
}

#[OpenApi(prefix_path = "/chat")]
impl ChatApi {
    /// Send a direct message
    #[oai(path = "/messages", method = "post", tag = "ApiTags::Chat")]
    async fn send(
        &self,
        body: Json<SendChatMessageRequest>,
    ) -> Result<Json<ChatMessageResponse>, ApiError> {
        let message = self.chat_messages.send(&body.0).await?;

        Ok(Json(ChatMessageResponse::from(message)))
    }

    /// The conversation between two users, both directions, oldest first
    #[oai(path = "/messages", method = "get", tag = "ApiTags::Chat")]
    async fn conversation(
        &self,
        user_id1: Query<i32>,
        user_id2: Query<i32>,
    ) -> Result<Json<Vec<ChatMessageResponse>>, ApiError> {
        let messages = self.chat_messages.conversation(user_id1.0, user_id2.0).await?;

        Ok(Json(
            messages.into_iter().map(ChatMessageResponse::from).collect(),
        ))
    }
}
