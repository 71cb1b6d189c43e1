//! # Pitstop API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use pitstop_core::ports::TokenService;
use pitstop_infra::JwtTokenService;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Pitstop API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state. An unreachable store is fatal: the process
    // must not begin serving without it.
    let state = AppState::new(config.store.as_ref(), config.cookie_policy)
        .await
        .map_err(|e| {
            tracing::error!("Store initialization failed: {e}");
            std::io::Error::other(e.to_string())
        })?;

    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let cors_origins = config.cors_origins.clone();

    // Start HTTP server
    HttpServer::new(move || {
        // Credentialed cookies require an explicit origin allow-list.
        let mut cors = Cors::default()
            .supports_credentials()
            .allow_any_method()
            .allow_any_header();
        for origin in &cors_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,pitstop_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
