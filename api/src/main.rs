//! Marketing API Server
//!
//! REST service exposing marketing campaigns and their targeting rules.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresCampaignRepository;
use app::CampaignService;
use config::Config;
use domain::ports::CampaignRepository;

/// Application state shared across all handlers
///
/// Generic over the repository port so the same router runs against the
/// in-memory repository in tests.
pub struct AppState<CR>
where
    CR: CampaignRepository,
{
    pub campaign_service: Arc<CampaignService<CR>>,
}

impl<CR> Clone for AppState<CR>
where
    CR: CampaignRepository,
{
    fn clone(&self) -> Self {
        Self {
            campaign_service: self.campaign_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any repository implementation
pub fn router<CR>(state: AppState<CR>) -> Router
where
    CR: CampaignRepository + 'static,
{
    Router::new()
        // Health check
        .route("/health", get(health))
        // Campaign CRUD
        .route(
            "/api/v1/campaigns",
            get(handlers::list_campaigns::<CR>).post(handlers::create_campaign::<CR>),
        )
        .route(
            "/api/v1/campaigns/:id",
            get(handlers::get_campaign::<CR>)
                .put(handlers::update_campaign::<CR>)
                .delete(handlers::delete_campaign::<CR>),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,marketing_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marketing API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters and services
    let campaign_repo = Arc::new(PostgresCampaignRepository::new(db));
    let campaign_service = Arc::new(CampaignService::new(campaign_repo));

    let state = AppState { campaign_service };
    let app = router(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
