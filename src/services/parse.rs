// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club feed markup parsing.
//!
//! One feed page holds a list of entry containers, each with a header
//! (athlete link, optional timestamp, time stats) and usually a body
//! (the activity title). Consecutive activities by the same athlete share
//! one header and only the first carries a timestamp, so later records
//! inherit the previous record's timestamp.

use crate::error::AppError;
use crate::models::Activity;
use crate::services::duration::duration_from_tokens;
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};

/// Width of the timezone suffix on the feed's datetime attribute
/// ("2021-04-03 19:02:12 UTC").
const TIMESTAMP_SUFFIX_LEN: usize = 4;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Parse one page of feed markup into activity records, in page order
/// (most recent first, the feed's natural order).
///
/// A page that does not match the expected schema fails as a whole; there
/// is no partial recovery.
pub fn parse_feed_page(markup: &str) -> Result<Vec<Activity>, AppError> {
    let document = Html::parse_document(markup);

    let entry_head = selector("div.entry-head");
    let athlete_link = selector("a.entry-athlete");
    let timestamp = selector("time.timestamp");
    let title_link = selector("div.entry-body strong a");
    let time_item = selector("li[title=\"Time\"]");

    let mut activities: Vec<Activity> = Vec::new();

    for head in document.select(&entry_head) {
        // The entry container is the header's parent element
        let entry = head
            .parent()
            .and_then(ElementRef::wrap)
            .ok_or_else(|| AppError::Parse("entry header has no parent container".to_string()))?;

        let athlete = entry
            .select(&athlete_link)
            .next()
            .ok_or_else(|| AppError::Parse("feed entry is missing its athlete link".to_string()))?;

        let href = athlete
            .value()
            .attr("href")
            .ok_or_else(|| AppError::Parse("athlete link has no href".to_string()))?;
        let user_id = href
            .split('/')
            .nth(2)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| {
                AppError::Parse(format!("athlete link {href:?} has no athlete id segment"))
            })?
            .to_string();

        let display_name = athlete
            .text()
            .map(str::trim)
            .find(|text| !text.is_empty())
            .ok_or_else(|| AppError::Parse("athlete link has no name text".to_string()))?
            .to_string();

        let posted_at = match entry
            .select(&timestamp)
            .next()
            .and_then(|el| el.value().attr("datetime"))
        {
            Some(raw) => parse_feed_timestamp(raw)?,
            // Unstamped entries take the previous record's timestamp
            None => {
                activities
                    .last()
                    .map(|previous| previous.timestamp)
                    .ok_or_else(|| {
                        AppError::Parse(
                            "first entry has no timestamp and none to inherit".to_string(),
                        )
                    })?
            }
        };

        let activity_type = entry
            .select(&title_link)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty());

        let time_element = entry.select(&time_item).next().ok_or_else(|| {
            AppError::Parse("feed entry is missing its time element".to_string())
        })?;
        let duration = duration_from_tokens(time_element.text())?;

        activities.push(Activity::new(
            user_id,
            display_name,
            posted_at,
            duration,
            activity_type,
        ));
    }

    Ok(activities)
}

/// Parse the feed's datetime attribute, truncating the fixed-width
/// timezone suffix.
fn parse_feed_timestamp(raw: &str) -> Result<NaiveDateTime, AppError> {
    let truncated = raw
        .get(..raw.len().saturating_sub(TIMESTAMP_SUFFIX_LEN))
        .ok_or_else(|| AppError::Parse(format!("malformed feed timestamp {raw:?}")))?;

    NaiveDateTime::parse_from_str(truncated, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(truncated, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|err| AppError::Parse(format!("invalid feed timestamp {raw:?}: {err}")))
}
