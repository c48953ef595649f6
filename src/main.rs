use agripartner_backend::api::{
    ChatApi, CommunityApi, DashboardApi, FarmingApi, FinanceApi, HealthApi, InsuranceApi,
    NotificationsApi, PartnershipsApi, RiskApi, UsersApi,
};
use agripartner_backend::app_data::AppData;
use agripartner_backend::config::{self, AppSettings};
use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging().expect("Failed to initialize logging");

    let settings = AppSettings::from_env();

    // Connect to database
    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database: {}", settings.database_url);

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    tracing::info!("Database migrations completed");

    let app_data = AppData::init(db, &settings);

    // Create OpenAPI service with all endpoint groups
    let api_service = OpenApiService::new(
        (
            HealthApi,
            UsersApi::new(&app_data),
            PartnershipsApi::new(&app_data),
            DashboardApi::new(&app_data),
            FarmingApi::new(&app_data),
            FinanceApi::new(&app_data),
            InsuranceApi::new(&app_data),
            RiskApi::new(&app_data),
            CommunityApi::new(&app_data),
            NotificationsApi::new(&app_data),
            ChatApi::new(&app_data),
        ),
        "AgriPartner API",
        "1.0.0",
    )
    .server(format!("http://{}/api", settings.bind_addr));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger", settings.bind_addr);

    Server::new(TcpListener::bind(settings.bind_addr.clone()))
        .run(app)
        .await
}
