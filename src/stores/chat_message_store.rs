use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::internal::{DomainError, InternalError};
use crate::types::db::chat_message::{self, ActiveModel, Entity as ChatMessage};
use crate::types::db::user::Entity as User;
use crate::types::dto::chat::SendChatMessageRequest;

/// ChatMessageStore manages direct messages between users
pub struct ChatMessageStore {
    db: DatabaseConnection,
}

impl ChatMessageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Send a message between two existing users
    ///
    /// Sender and receiver lookups are independent reads and run
    /// concurrently.
    pub async fn send(
        &self,
        input: &SendChatMessageRequest,
    ) -> Result<chat_message::Model, InternalError> {
        let (sender, receiver) = tokio::try_join!(
            async {
                User::find_by_id(input.sender_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| InternalError::database("find_sender", e))
            },
            async {
                User::find_by_id(input.receiver_id)
                    .one(&self.db)
                    .await
                    .map_err(|e| InternalError::database("find_receiver", e))
            },
        )?;

        if sender.is_none() {
            return Err(DomainError::NotFound {
                entity: "sender",
                id: input.sender_id,
            }
            .into());
        }

        if receiver.is_none() {
            return Err(DomainError::NotFound {
                entity: "receiver",
                id: input.receiver_id,
            }
            .into());
        }

        let new_message = ActiveModel {
            sender_id: Set(input.sender_id),
            receiver_id: Set(input.receiver_id),
            message: Set(input.message.clone()),
            is_read: Set(false),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        new_message
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_chat_message", e))
    }

    /// Every message exchanged between two users, in both directions,
    /// oldest first.
    pub async fn conversation(
        &self,
        user_id1: i32,
        user_id2: i32,
    ) -> Result<Vec<chat_message::Model>, InternalError> {
        ChatMessage::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(chat_message::Column::SenderId.eq(user_id1))
                            .add(chat_message::Column::ReceiverId.eq(user_id2)),
                    )
                    .add(
                        Condition::all()
                            .add(chat_message::Column::SenderId.eq(user_id2))
                            .add(chat_message::Column::ReceiverId.eq(user_id1)),
                    ),
            )
            .order_by_asc(chat_message::Column::CreatedAt)
            .order_by_asc(chat_message::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_conversation", e))
    }
}
