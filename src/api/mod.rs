// API layer - HTTP endpoints
pub mod chat;
pub mod community;
pub mod dashboard;
pub mod farming;
pub mod finance;
pub mod health;
pub mod insurance;
pub mod notifications;
pub mod partnerships;
pub mod risk;
pub mod users;

pub use chat::ChatApi;
pub use community::CommunityApi;
pub use dashboard::DashboardApi;
pub use farming::FarmingApi;
pub use finance::FinanceApi;
pub use health::HealthApi;
pub use insurance::InsuranceApi;
pub use notifications::NotificationsApi;
pub use partnerships::PartnershipsApi;
pub use risk::RiskApi;
pub use users::UsersApi;
