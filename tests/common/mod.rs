// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use chrono::DateTime;
use club_tracker::config::Config;
use club_tracker::error::AppError;
use club_tracker::routes::create_router;
use club_tracker::services::{FeedSource, FeedWalker};
use club_tracker::AppState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Epoch base for fixtures, safely inside the default scoring window.
#[allow(dead_code)]
pub const BASE_EPOCH: i64 = 1_625_000_000;

/// Feed source serving canned markup pages in order.
///
/// Once the queue runs dry it serves pages with no activities, which the
/// walker treats as a stall. Happy-path fixtures therefore end with an
/// entry older than the window start so the walk stops cleanly.
pub struct StubFeed {
    pages: Mutex<VecDeque<String>>,
}

impl StubFeed {
    #[allow(dead_code)]
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
        }
    }
}

#[async_trait]
impl FeedSource for StubFeed {
    async fn fetch_page(&self, _cursor: Option<i64>) -> Result<String, AppError> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| feed_page(&[])))
    }
}

/// Feed source that fails every fetch.
#[allow(dead_code)]
pub struct FailingFeed;

#[async_trait]
impl FeedSource for FailingFeed {
    async fn fetch_page(&self, _cursor: Option<i64>) -> Result<String, AppError> {
        Err(AppError::Fetch("connection refused".to_string()))
    }
}

/// One feed entry in the shape Strava's club feed renders.
#[allow(dead_code)]
pub fn feed_entry(
    user_id: &str,
    display_name: &str,
    epoch: i64,
    title: &str,
    time_html: &str,
) -> String {
    let stamp = DateTime::from_timestamp(epoch, 0)
        .expect("fixture epoch in range")
        .naive_utc()
        .format("%Y-%m-%d %H:%M:%S UTC");
    format!(
        r#"<div class="activity">
  <div class="entry-head">
    <a class="entry-athlete" href="/athletes/{user_id}">
      {display_name}
    </a>
    <time class="timestamp" datetime="{stamp}">Today</time>
  </div>
  <div class="entry-body">
    <strong><a href="/activities/{epoch}">{title}</a></strong>
  </div>
  <ul class="inline-stats">
    <li title="Time">{time_html}</li>
  </ul>
</div>"#
    )
}

/// Markup for a duration stat: "1h 5m 3s" style with unit abbreviations.
#[allow(dead_code)]
pub fn hms(hours: u32, minutes: u32, seconds: u32) -> String {
    format!(
        r#"{hours}<abbr class="unit">h</abbr> {minutes}<abbr class="unit">m</abbr> {seconds}<abbr class="unit">s</abbr>"#
    )
}

/// A whole feed page wrapping the given entries.
pub fn feed_page(entries: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><body><div class=\"feed\">{}</div></body></html>",
        entries.join("\n")
    )
}

/// An entry older than the default window start; ends the walk and is
/// filtered out of every view.
#[allow(dead_code)]
pub fn pre_window_entry() -> String {
    feed_entry(
        "999001",
        "Ancient History",
        1_600_000_000,
        "Run",
        &hms(0, 10, 0),
    )
}

/// Create a test app over canned feed pages.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(pages: Vec<String>) -> (axum::Router, Arc<AppState>) {
    create_app_with_source(Arc::new(StubFeed::new(pages)))
}

/// Create a test app whose every feed fetch fails.
#[allow(dead_code)]
pub fn create_failing_app() -> (axum::Router, Arc<AppState>) {
    create_app_with_source(Arc::new(FailingFeed))
}

#[allow(dead_code)]
fn create_app_with_source(source: Arc<dyn FeedSource>) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let walker = FeedWalker::new(source, config.window_start_epoch);
    let state = Arc::new(AppState { config, walker });
    (create_router(state.clone()), state)
}
