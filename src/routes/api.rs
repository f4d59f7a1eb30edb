// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes serving feed-derived views.
//!
//! Key order inside the JSON objects is part of the contract: totals list
//! teams in roster order, leaderboards list athletes best first.

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::services::aggregate::{self, LeaderboardEntry};
use crate::time_utils::format_hms;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Feed-derived API routes.
///
/// Every request walks the feed from scratch, so responses always reflect
/// the feed as of the request.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/latest-activity", get(get_latest_activity))
        .route("/api/total-duration", get(get_total_duration))
        .route("/api/team-totals", get(get_team_totals))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/leaderboard/weighted", get(get_weighted_leaderboard))
}

// ─── Latest Activity ─────────────────────────────────────────

/// Most recent activity inside the scoring window.
async fn get_latest_activity(State(state): State<Arc<AppState>>) -> Result<Json<Activity>> {
    let mut window = state.walker.collect_window().await?;
    let latest = window
        .pop()
        .ok_or_else(|| AppError::NotFound("no activities inside the window".to_string()))?;
    Ok(Json(latest))
}

// ─── Club Total ──────────────────────────────────────────────

/// Combined active time across the whole club.
#[derive(Serialize)]
pub struct TotalDurationResponse {
    pub total_active_time: String,
}

async fn get_total_duration(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TotalDurationResponse>> {
    let window = state.walker.collect_window().await?;
    Ok(Json(TotalDurationResponse {
        total_active_time: format_hms(aggregate::duration_sum(&window)),
    }))
}

// ─── Team Totals ─────────────────────────────────────────────

/// Raw and weighted totals per team, one key pair per roster.
async fn get_team_totals(State(state): State<Arc<AppState>>) -> Result<Json<Map<String, Value>>> {
    let window = state.walker.collect_window().await?;

    let mut body = Map::new();
    for team in aggregate::team_totals(&window, &state.config.rosters) {
        body.insert(
            format!("{} Total Active Time", team.team),
            Value::String(format_hms(team.total)),
        );
        body.insert(
            format!("{} Weighted Active Time", team.team),
            Value::String(format_hms(team.weighted_total)),
        );
    }
    Ok(Json(body))
}

// ─── Leaderboards ────────────────────────────────────────────

async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Result<Json<Map<String, Value>>> {
    let window = state.walker.collect_window().await?;
    Ok(Json(board_body(aggregate::leaderboard_by_duration(
        &window,
    ))))
}

async fn get_weighted_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Map<String, Value>>> {
    let window = state.walker.collect_window().await?;
    Ok(Json(board_body(
        aggregate::leaderboard_by_weighted_duration(&window),
    )))
}

fn board_body(entries: Vec<LeaderboardEntry>) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|entry| (entry.display_name, Value::String(format_hms(entry.total))))
        .collect()
}
