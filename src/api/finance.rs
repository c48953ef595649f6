use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::ApiError;
use crate::services::FinancialReportService;
use crate::stores::FinancialRecordStore;
use crate::types::dto::finance::{
    CreateFinancialRecordRequest, FinancialRecordResponse, FinancialSummaryResponse,
};

/// Expense ledger and financial summary endpoints
pub struct FinanceApi {
    financial_records: Arc<FinancialRecordStore>,
    financial_reports: Arc<FinancialReportService>,
}

impl FinanceApi {
    pub fn new(app_data: &AppData) -> Self {
        Self {
            financial_records: app_data.financial_records.clone(),
            financial_reports: app_data.financial_reports.clone(),
        }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Financial endpoints
    Finance,
}

#[OpenApi]
impl FinanceApi {
    /// Record an expense against a partnership
    #[oai(path = "/financial-records", method = "post", tag = "ApiTags::Finance")]
    async fn create_record(
        &self,
        body: Json<CreateFinancialRecordRequest>,
    ) -> Result<Json<FinancialRecordResponse>, ApiError> {
        let record = self.financial_records.create(&body.0).await?;

        Ok(Json(FinancialRecordResponse::try_from(record)?))
    }

    /// Expense totals, breakdown, and projected revenue for a partnership
    #[oai(
        path = "/partnerships/:partnership_id/financial-summary",
        method = "get",
        tag = "ApiTags::Finance"
    )]
    async fn financial_summary(
        &self,
        partnership_id: Path<i32>,
    ) -> Result<Json<FinancialSummaryResponse>, ApiError> {
        let summary = self.financial_reports.summary(partnership_id.0).await?;

        Ok(Json(summary))
    }
}
