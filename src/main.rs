// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club-Tracker API Server
//!
//! Walks a Strava club's activity feed and serves active-time totals,
//! team standings, and leaderboards for the club competition.

use club_tracker::{
    config::Config,
    services::{FeedClient, FeedWalker},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        club_id = %config.club_id,
        "Starting Club-Tracker API"
    );

    // Feed walker backed by the live club feed
    let client = FeedClient::new(config.club_id.clone(), config.session_cookie.clone());
    let walker = FeedWalker::new(Arc::new(client), config.window_start_epoch);
    tracing::info!(
        teams = config.rosters.len(),
        window_start_epoch = config.window_start_epoch,
        "Feed walker initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        walker,
    });

    // Build router
    let app = club_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("club_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
