use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::PartnershipStore;
use crate::types::dto::partnerships::{CreatePartnershipRequest, PartnershipResponse};

/// Partnership endpoints
pub struct PartnershipsApi {
    partnerships: Arc<PartnershipStore>,
}

impl PartnershipsApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            partnerships: app_data.partnerships.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Partnership endpoints
    Partnerships,
}

#[OpenApi(prefix_path = "/partnerships")]
impl PartnershipsApi {
    /// Create a partnership for a partner-role user
    #[oai(path = "/", method = "post", tag = "ApiTags::Partnerships")]
    async fn create(
        &self,
        body: Json<CreatePartnershipRequest>,
    ) -> Result<Json<PartnershipResponse>, ApiError> {
        let partnership = self.partnerships.create(&body.0).await?;

        Ok(Json(PartnershipResponse::try_from(partnership)?))
    }
}
