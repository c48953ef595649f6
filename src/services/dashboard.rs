use std::sync::Arc;

use crate::errors::internal::{DomainError, InternalError};
use crate::services::financial_reports::FinancialReportService;
use crate::stores::{
    FarmActivityStore, FarmPlotStore, NotificationStore, PartnershipStore, RiskAlertStore,
};
use crate::types::dto::dashboard::{
    DashboardFinancialSummary, PartnerDashboardResponse, RecentActivityResponse,
};
use crate::types::dto::farming::FarmPlotResponse;
use crate::types::dto::notifications::NotificationResponse;
use crate::types::dto::partnerships::PartnershipResponse;
use crate::types::dto::risk::RiskAlertResponse;

/// At most this many activities appear on the dashboard.
const RECENT_ACTIVITY_LIMIT: u64 = 10;

/// At most this many notifications appear on the dashboard.
const NOTIFICATION_LIMIT: u64 = 20;

/// DashboardService assembles one partner's full dashboard payload.
pub struct DashboardService {
    partnerships: Arc<PartnershipStore>,
    farm_plots: Arc<FarmPlotStore>,
    farm_activities: Arc<FarmActivityStore>,
    risk_alerts: Arc<RiskAlertStore>,
    notifications: Arc<NotificationStore>,
    financial_reports: Arc<FinancialReportService>,
}

impl DashboardService {
    pub fn new(
        partnerships: Arc<PartnershipStore>,
        farm_plots: Arc<FarmPlotStore>,
        farm_activities: Arc<FarmActivityStore>,
        risk_alerts: Arc<RiskAlertStore>,
        notifications: Arc<NotificationStore>,
        financial_reports: Arc<FinancialReportService>,
    ) -> Self {
        Self {
            partnerships,
            farm_plots,
            farm_activities,
            risk_alerts,
            notifications,
            financial_reports,
        }
    }

    /// Assemble the dashboard for one partner.
    ///
    /// The partnership lookup gates everything else: it resolves the
    /// partnership id the remaining fetches need, and fails with NotFound
    /// when the partner has no partnership. The fan-out fetches are
    /// independent reads and run concurrently; any failure aborts the whole
    /// composition, never returning a partial dashboard.
    pub async fn partner_dashboard(
        &self,
        partner_id: i32,
    ) -> Result<PartnerDashboardResponse, InternalError> {
        let partnership = self
            .partnerships
            .first_for_partner(partner_id)
            .await?
            .ok_or(DomainError::NoPartnership { partner_id })?;

        let plots = self.farm_plots.list_for_partnership(partnership.id).await?;
        let plot_ids: Vec<i32> = plots.iter().map(|plot| plot.id).collect();

        let (activities, expenses, notifications, alerts) = tokio::try_join!(
            self.farm_activities
                .recent_for_plots(&plot_ids, RECENT_ACTIVITY_LIMIT),
            self.financial_reports.expense_totals(partnership.id),
            self.notifications
                .recent_for_user(partner_id, NOTIFICATION_LIMIT),
            self.risk_alerts.list_for_plots(&plot_ids),
        )?;

        let farm_plots = plots
            .into_iter()
            .map(FarmPlotResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let recent_activities = activities
            .into_iter()
            .map(|(activity, creator)| RecentActivityResponse::from_parts(activity, creator))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PartnerDashboardResponse {
            partnership: PartnershipResponse::try_from(partnership)?,
            farm_plots,
            recent_activities,
            financial_summary: DashboardFinancialSummary {
                total_expenses: expenses.total,
                expense_breakdown: expenses.breakdown,
            },
            notifications: notifications
                .into_iter()
                .map(NotificationResponse::from)
                .collect(),
            risk_alerts: alerts.into_iter().map(RiskAlertResponse::from).collect(),
        })
    }
}
