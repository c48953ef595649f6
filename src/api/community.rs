use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::CommunityEventStore;
use crate::types::dto::community::{CommunityEventResponse, CreateCommunityEventRequest};

/// Community event endpoints
pub struct CommunityApi {
    community_events: Arc<CommunityEventStore>,
}

impl CommunityApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            community_events: app_data.community_events.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Community endpoints
    Community,
}

#[OpenApi]
impl CommunityApi {
    /// Create a community event
    #[oai(path = "/community-events", method = "post", tag = "ApiTags::Community")]
    async fn create(
        &self,
        body: Json<CreateCommunityEventRequest>,
    ) -> Result<Json<CommunityEventResponse>, ApiError> {
        let event = self.community_events.create(&body.0).await?;

        Ok(Json(CommunityEventResponse::try_from(event)?))
    }

    /// Active events, latest event date first
    #[oai(path = "/community-events", method = "get", tag = "ApiTags::Community")]
    async fn list(&self) -> Result<Json<Vec<CommunityEventResponse>>, ApiError> {
        let events = self.community_events.list_active().await?;

        let events = events
            .into_iter()
            .map(CommunityEventResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Json(events))
    }
}
