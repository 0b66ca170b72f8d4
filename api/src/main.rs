use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use pb_api::app::create_app;
use pb_api::routes::AppState;
use pb_core::services::{
    AuthService, ProjectService, SweeperConfig, TokenService, TokenServiceConfig, TokenSweeper,
    UserService,
};
use pb_infra::database::{
    create_pool, MySqlProjectRepository, MySqlTokenRepository, MySqlUserRepository,
};
use pb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting ProjBoard API server");

    // Load configuration; a missing JWT_SECRET or DATABASE_URL is fatal
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Database pool
    let pool = match create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let project_repository = Arc::new(MySqlProjectRepository::new(pool.clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool));

    // Services
    let token_config = TokenServiceConfig::new(config.auth.jwt_secret.clone())
        .with_expiry_hours(config.auth.token_expiry_hours);
    let token_service = match TokenService::new(token_repository.clone(), token_config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("Failed to initialize token service: {}", e);
            std::process::exit(1);
        }
    };

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        token_service.clone(),
    ));
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let project_service = Arc::new(ProjectService::new(project_repository, user_repository));

    // Background sweep of expired revocation entries
    let sweeper = Arc::new(TokenSweeper::new(
        token_repository,
        SweeperConfig {
            interval_seconds: config.auth.sweep_interval_seconds,
            enabled: true,
        },
    ));
    sweeper.start_background_task();

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
        project_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
