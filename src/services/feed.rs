// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client for the Strava club feed.
//!
//! The feed is the club's member-facing web page, not the API, so requests
//! authenticate with a web session cookie and the response body is markup.

use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header;

/// Session cookie Strava's web frontend authenticates with.
const SESSION_COOKIE_NAME: &str = "_strava4_session";

/// One page of raw feed markup per call, keyed by a pagination cursor.
///
/// The cursor is the epoch-seconds of the oldest activity seen so far;
/// `None` asks for the most recent page. Implementations do not retry,
/// so a failed fetch fails the whole aggregation request.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_page(&self, cursor: Option<i64>) -> Result<String, AppError>;
}

/// Club feed client backed by a pre-supplied Strava web session.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
    club_id: String,
    session_cookie: String,
}

impl FeedClient {
    /// Create a new feed client for one club.
    pub fn new(club_id: String, session_cookie: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://www.strava.com".to_string(),
            club_id,
            session_cookie,
        }
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_page(&self, cursor: Option<i64>) -> Result<String, AppError> {
        let url = format!("{}/clubs/{}/feed", self.base_url, self.club_id);

        let mut request = self
            .http
            .get(&url)
            .header(
                header::COOKIE,
                format!("{}={}", SESSION_COOKIE_NAME, self.session_cookie),
            )
            .query(&[("feed_type", "club")]);

        // The feed pages with two equal values: everything strictly before
        // the cursor instant
        if let Some(cursor) = cursor {
            let cursor = cursor.to_string();
            request = request.query(&[("before", cursor.as_str()), ("cursor", cursor.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, "Club feed request rejected");
            return Err(AppError::Fetch(format!(
                "HTTP {} fetching club feed",
                status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Fetch(format!("reading feed body: {e}")))
    }
}
