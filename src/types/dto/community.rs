use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::InternalError;
use crate::types::db::community_event::{self, EventType};
use crate::types::dto::parse_decimal;

/// Request model for community event creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateCommunityEventRequest {
    pub title: String,

    pub description: String,

    pub event_type: EventType,

    pub event_date: DateTime<Utc>,

    pub location: String,

    /// Participation fee, zero or more
    pub fee: Decimal,

    /// Cap on attendance, must be positive when given
    pub max_participants: Option<i32>,

    /// User organizing the event
    pub created_by: i32,
}

#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CommunityEventResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub fee: Decimal,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub is_active: bool,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<community_event::Model> for CommunityEventResponse {
    type Error = InternalError;

    fn try_from(model: community_event::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            event_type: model.event_type,
            event_date: model.event_date,
            location: model.location,
            fee: parse_decimal("fee", &model.fee)?,
            max_participants: model.max_participants,
            current_participants: model.current_participants,
            is_active: model.is_active,
            created_by: model.created_by,
            created_at: model.created_at,
        })
    }
}
