//! # Blog Post API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use api_server::config::AppConfig;
use api_server::state::AppState;
use api_server::{startup, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting blog post API server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    startup::run(listener, state)?.await
}
