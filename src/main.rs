// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use ev_route_predictor::application::prediction_service::PredictionService;
use ev_route_predictor::application::route_fetcher::RouteFetcher;
use ev_route_predictor::application::waypoints::DirectPlanner;
use ev_route_predictor::infrastructure::config::load_config;
use ev_route_predictor::infrastructure::model_store::load_model;
use ev_route_predictor::infrastructure::ors_client::OrsClient;
use ev_route_predictor::presentation::app_state::AppState;
use ev_route_predictor::presentation::handlers::{ev_prediction_full, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_config()?;

    // A missing or corrupt model artifact is fatal before the server binds.
    let model = load_model(&config.model.path)
        .with_context(|| format!("cannot serve without model artifact {}", config.model.path))?;

    // Create provider client (infrastructure layer)
    let provider = Arc::new(OrsClient::new(
        config.provider.base_url.clone(),
        config.provider.api_key.clone(),
        config.provider.timeout(),
    )?);

    // Create services (application layer)
    let fetcher = RouteFetcher::new(provider, Arc::new(DirectPlanner));
    let prediction_service = PredictionService::new(model, fetcher);

    // Create application state
    let state = Arc::new(AppState { prediction_service });

    // Build router (presentation layer)
    // Any-origin CORS is the development posture; restrict before exposing
    // this beyond a trusted network.
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/ev_prediction_full", post(ev_prediction_full))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server.bind))?;
    println!("Starting ev-route-predictor service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
