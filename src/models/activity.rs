// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Club feed activity model.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::time::Duration;

/// One workout posted to the club feed.
///
/// Equality and hashing cover every field; overlapping feed pages return
/// the boundary record twice and those repeats are removed by value
/// equality. The flip side is that two genuinely distinct activities that
/// agree on all fields (same athlete, same second, same duration, same
/// label) collapse into one. Totals are defined relative to that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Activity {
    /// Strava athlete ID (third segment of the athlete link path)
    pub user_id: String,
    /// Athlete display name at the time of posting
    pub display_name: String,
    /// When the activity was posted, at feed precision
    pub timestamp: NaiveDateTime,
    /// `timestamp` as seconds since the Unix epoch; drives pagination cursors
    pub epoch_seconds: i64,
    /// Elapsed time for the activity
    #[serde(serialize_with = "crate::time_utils::serialize_hms")]
    pub duration: Duration,
    /// Free-text label from the feed entry ("Afternoon Run", "Lunch Ride", …)
    pub activity_type: Option<String>,
}

impl Activity {
    /// Build a record, deriving `epoch_seconds` from the timestamp.
    ///
    /// Feed timestamps carry no offset; they are keyed as UTC so the
    /// epoch value is independent of the host timezone.
    pub fn new(
        user_id: String,
        display_name: String,
        timestamp: NaiveDateTime,
        duration: Duration,
        activity_type: Option<String>,
    ) -> Self {
        Self {
            user_id,
            display_name,
            epoch_seconds: timestamp.and_utc().timestamp(),
            timestamp,
            duration,
            activity_type,
        }
    }
}
