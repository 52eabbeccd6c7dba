pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Comparison routes
        .route("/api/compare", post(routes::compare::compare))
        .route("/api/compare/quick", post(routes::compare::quick))
        .route("/api/compare/report", post(routes::compare::report))
        .route("/api/normalize", post(routes::compare::normalize))
        // Phrase routes
        .route("/api/phrases/complexity", post(routes::phrases::complexity))
        .route("/api/phrases/suggestions", post(routes::phrases::suggestions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        minimum_accuracy = config.comparison.minimum_accuracy,
        strict_word_order = config.comparison.strict_word_order,
        allow_typos = config.comparison.allow_typos,
        "Loaded grading defaults"
    );

    let addr = config.addr();
    let app = build_router(AppState::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
