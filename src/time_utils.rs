// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for duration formatting.

use serde::Serializer;
use std::time::Duration;

/// Format a duration as `H:MM:SS`.
///
/// Hours are not zero-padded and keep counting past 24 ("55:02:09").
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

/// Serde adapter: serialize a duration as its `H:MM:SS` string.
pub fn serialize_hms<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_hms(*duration))
}
