use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppSettings;
use crate::services::{DashboardService, FinancialReportService, PasswordService};
use crate::stores::{
    ChatMessageStore, CommunityEventStore, FarmActivityStore, FarmPlotStore, FinancialRecordStore,
    InsurancePolicyStore, NotificationStore, PartnershipStore, RiskAlertStore, UserStore,
};

/// Centralized application data following the main-owned stores pattern
///
/// Every store and service is created once here and shared across endpoint
/// structs via Arc. Stores receive the connection handle at construction,
/// so tests can wire an isolated store set against their own database.
pub struct AppData {
    pub db: DatabaseConnection,
    pub users: Arc<UserStore>,
    pub partnerships: Arc<PartnershipStore>,
    pub farm_plots: Arc<FarmPlotStore>,
    pub farm_activities: Arc<FarmActivityStore>,
    pub financial_records: Arc<FinancialRecordStore>,
    pub insurance_policies: Arc<InsurancePolicyStore>,
    pub risk_alerts: Arc<RiskAlertStore>,
    pub community_events: Arc<CommunityEventStore>,
    pub notifications: Arc<NotificationStore>,
    pub chat_messages: Arc<ChatMessageStore>,
    pub passwords: Arc<PasswordService>,
    pub financial_reports: Arc<FinancialReportService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppData {
    /// Wire up all stores and services
    ///
    /// The database must be connected and migrated before calling this.
    pub fn init(db: DatabaseConnection, settings: &AppSettings) -> Self {
        tracing::debug!("Creating stores...");
        let users = Arc::new(UserStore::new(db.clone()));
        let partnerships = Arc::new(PartnershipStore::new(db.clone()));
        let farm_plots = Arc::new(FarmPlotStore::new(db.clone()));
        let farm_activities = Arc::new(FarmActivityStore::new(db.clone()));
        let financial_records = Arc::new(FinancialRecordStore::new(db.clone()));
        let insurance_policies = Arc::new(InsurancePolicyStore::new(db.clone()));
        let risk_alerts = Arc::new(RiskAlertStore::new(db.clone()));
        let community_events = Arc::new(CommunityEventStore::new(db.clone()));
        let notifications = Arc::new(NotificationStore::new(db.clone()));
        let chat_messages = Arc::new(ChatMessageStore::new(db.clone()));

        tracing::debug!("Creating services...");
        let passwords = Arc::new(PasswordService::new());

        let financial_reports = Arc::new(FinancialReportService::new(
            financial_records.clone(),
            farm_plots.clone(),
            settings.market.clone(),
        ));

        let dashboard = Arc::new(DashboardService::new(
            partnerships.clone(),
            farm_plots.clone(),
            farm_activities.clone(),
            risk_alerts.clone(),
            notifications.clone(),
            financial_reports.clone(),
        ));

        tracing::debug!("AppData initialization complete");

        Self {
            db,
            users,
            partnerships,
            farm_plots,
            farm_activities,
            financial_records,
            insurance_policies,
            risk_alerts,
            community_events,
            notifications,
            chat_messages,
            passwords,
            financial_reports,
            dashboard,
        }
    }
}
