//! Route definitions for the Tourism Demand Forecast server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Weather analysis
        .nest("/weather", weather_routes())
}

/// Weather analysis routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/analysis", get(handlers::get_weather_analysis))
        .route(
            "/analysis/:location",
            get(handlers::get_destination_weather_analysis),
        )
}
