//! Forest Fire Dashboard - Backend
//!
//! Reads forestry business, vehicle and fire incident data from a managed
//! Postgres backend and serves it reshaped for the regional danger map and
//! the dashboard charts.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{InMemoryReader, SupabaseClient, TableReader};
use services::DashboardService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(reader: Arc<dyn TableReader>, config: Config) -> Self {
        Self {
            dashboard: DashboardService::new(reader),
            config: Arc::new(config),
        }
    }
}

/// Pick the table reader for the configured backend
pub fn build_reader(config: &Config) -> error::AppResult<Arc<dyn TableReader>> {
    match &config.backend.fixture_path {
        Some(path) => {
            tracing::info!("Serving backend data from fixture {}", path);
            Ok(Arc::new(InMemoryReader::from_json_file(path)?))
        }
        None => {
            tracing::info!("Reading backend data from {}", config.backend.url);
            Ok(Arc::new(SupabaseClient::new(&config.backend)?))
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Forest Fire Dashboard API v1.0"
}
