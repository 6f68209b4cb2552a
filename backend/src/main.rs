//! Tourism Demand Forecast - Backend Server
//!
//! Serves weather outlooks for Caribbean destinations: forecast trends,
//! threshold alerts and a tourism impact score per trip.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::WeatherClient;
use services::WeatherAnalysisService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_analysis: WeatherAnalysisService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tf_server=debug,shared=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Tourism Demand Forecast Server");
    tracing::info!("Environment: {}", config.environment);

    if !config.weather.has_api_key() {
        tracing::warn!("TF_WEATHER__API_KEY is not set; weather analysis will be unavailable");
    }
    if config.weather.filter_to_date_range {
        tracing::info!("Forecast entries will be filtered to the requested dates");
    }

    let weather_client = WeatherClient::with_timeout(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
        Duration::from_secs(config.weather.request_timeout_secs),
    )?;

    // Create application state
    let state = AppState {
        weather_analysis: WeatherAnalysisService::new(weather_client)
            .with_date_range_filter(config.weather.filter_to_date_range),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Tourism Demand Forecast API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
