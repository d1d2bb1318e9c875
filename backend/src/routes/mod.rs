//! Route definitions for the forest fire dashboard

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/businesses", get(handlers::list_businesses))
        .route("/districts", get(handlers::list_districts))
        .route("/map", get(handlers::get_map))
        .nest("/reports", report_routes())
}

/// Chart report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(handlers::get_vehicle_report))
        .route("/danger-ranking", get(handlers::get_danger_ranking))
        .route("/monthly-fires", get(handlers::get_monthly_fires))
        .route("/yearly-fires", get(handlers::get_yearly_fires))
        .route("/tree-types", get(handlers::get_tree_types))
        .route("/fire-causes", get(handlers::get_fire_causes))
}
