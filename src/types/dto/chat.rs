use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::chat_message;

/// Request model for sending a chat message
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SendChatMessageRequest {
    pub sender_id: i32,
    pub receiver_id: i32,
    pub message: String,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<chat_message::Model> for ChatMessageResponse {
    fn from(model: chat_message::Model) -> Self {
        Self {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            message: model.message,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
