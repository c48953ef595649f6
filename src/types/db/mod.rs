// Database entities - SeaORM models
pub mod chat_message;
pub mod community_event;
pub mod farm_activity;
pub mod farm_plot;
pub mod financial_record;
pub mod insurance_policy;
pub mod notification;
pub mod partnership;
pub mod risk_alert;
pub mod user;
