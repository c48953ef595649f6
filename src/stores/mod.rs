// Stores layer - Data access and repository pattern
pub mod chat_message_store;
pub mod community_event_store;
pub mod farm_activity_store;
pub mod farm_plot_store;
pub mod financial_record_store;
pub mod insurance_policy_store;
pub mod notification_store;
pub mod partnership_store;
pub mod risk_alert_store;
pub mod user_store;

pub use chat_message_store::ChatMessageStore;
pub use community_event_store::CommunityEventStore;
pub use farm_activity_store::FarmActivityStore;
pub use farm_plot_store::FarmPlotStore;
pub use financial_record_store::FinancialRecordStore;
pub use insurance_policy_store::InsurancePolicyStore;
pub use notification_store::NotificationStore;
pub use partnership_store::PartnershipStore;
pub use risk_alert_store::RiskAlertStore;
pub use user_store::UserStore;
