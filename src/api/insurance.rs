use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::stores::InsurancePolicyStore;
use crate::types::dto::insurance::{CreateInsurancePolicyRequest, InsurancePolicyResponse};

/// Insurance policy endpoints
pub struct InsuranceApi {
    insurance_policies: Arc<InsurancePolicyStore>,
}

impl InsuranceApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            insurance_policies: app_data.insurance_policies.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Insurance endpoints
    Insurance,
}

#[OpenApi]
impl InsuranceApi {
    /// Create an insurance policy for a partnership
    #[oai(path = "/insurance-policies", method = "post", tag = "ApiTags::Insurance")]
    async fn create(
        &self,
        body: Json<CreateInsurancePolicyRequest>,
    ) -> Result<Json<InsurancePolicyResponse>, ApiError> {
        let policy = self.insurance_policies.create(&body.0).await?;

        Ok(Json(InsurancePolicyResponse::try_from(policy)?))
    }
}
