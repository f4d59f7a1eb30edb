// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Club-Tracker: team duration standings from a Strava club feed
//!
//! This crate provides the backend API that walks a club's activity feed,
//! parses the markup into activity records, and serves duration totals,
//! team standings, and leaderboards.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::FeedWalker;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub walker: FeedWalker,
}
