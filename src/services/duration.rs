// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Parser for the feed's elapsed-time markup.

use crate::error::AppError;
use std::time::Duration;

/// Build a duration from the text runs of a feed entry's time element.
///
/// The element interleaves numeric literals with single-letter unit
/// markers, so "1h 23m 45s" arrives as the runs `["1", "h", "23", "m",
/// "45", "s"]`. Each numeral is paired with the marker that follows it;
/// a repeated unit keeps its last value, a pair with an unrecognized
/// marker is skipped without inspecting the numeral, and a trailing
/// unpaired run is dropped. Units may appear in any order and missing
/// ones default to zero; no runs at all means a zero duration.
pub fn duration_from_tokens<'a, I>(tokens: I) -> Result<Duration, AppError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens
        .into_iter()
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let mut hours: u64 = 0;
    let mut minutes: u64 = 0;
    let mut seconds: u64 = 0;

    while let (Some(value), Some(unit)) = (tokens.next(), tokens.next()) {
        let component = match unit {
            "h" => &mut hours,
            "m" => &mut minutes,
            "s" => &mut seconds,
            _ => continue,
        };
        *component = value
            .parse()
            .map_err(|_| AppError::Parse(format!("invalid duration value {value:?}")))?;
    }

    Ok(Duration::from_secs(hours * 3600 + minutes * 60 + seconds))
}
