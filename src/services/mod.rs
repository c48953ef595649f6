// Services layer - Business logic and orchestration
pub mod dashboard;
pub mod financial_reports;
pub mod password;

pub use dashboard::DashboardService;
pub use financial_reports::FinancialReportService;
pub use password::PasswordService;
