// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Duration totals over a collected activity window.
//!
//! Everything here is pure: callers hand in the window slice and the
//! roster list and get owned summaries back. Weighted totals scale each
//! activity by type, sum, and round to whole seconds once at the end.

use crate::models::{Activity, Roster};
use std::time::Duration;

/// Multiplier applied to running activities.
pub const RUN_WEIGHT: f64 = 1.5;
/// Multiplier applied to riding activities.
pub const RIDE_WEIGHT: f64 = 1.25;

/// Weight for an activity type label such as "Afternoon Run".
///
/// Matching is on whole lowercased words; "run" beats "ride" when a label
/// somehow carries both. Unknown and missing labels count at face value.
pub fn type_weight(label: Option<&str>) -> f64 {
    let Some(label) = label else { return 1.0 };

    let mut saw_ride = false;
    for word in label.to_lowercase().split_whitespace() {
        match word {
            "run" => return RUN_WEIGHT,
            "ride" => saw_ride = true,
            _ => {}
        }
    }
    if saw_ride {
        RIDE_WEIGHT
    } else {
        1.0
    }
}

/// Sum of raw durations across the given activities.
pub fn duration_sum<'a, I>(activities: I) -> Duration
where
    I: IntoIterator<Item = &'a Activity>,
{
    activities.into_iter().map(|a| a.duration).sum()
}

/// Sum of type-weighted durations, rounded to whole seconds after summing.
pub fn weighted_duration_sum<'a, I>(activities: I) -> Duration
where
    I: IntoIterator<Item = &'a Activity>,
{
    let seconds: f64 = activities
        .into_iter()
        .map(|a| a.duration.as_secs_f64() * type_weight(a.activity_type.as_deref()))
        .sum();
    Duration::from_secs(seconds.round() as u64)
}

/// Raw and weighted active time for one team.
#[derive(Debug, Clone)]
pub struct TeamTotals {
    /// Team name as configured in the roster.
    pub team: String,
    /// Sum of member activity durations.
    pub total: Duration,
    /// Type-weighted sum of member activity durations.
    pub weighted_total: Duration,
}

/// Total raw and weighted duration per roster, in roster order.
///
/// An activity by a user on no roster is dropped without complaint; club
/// feeds routinely include athletes outside the competition.
pub fn team_totals(activities: &[Activity], rosters: &[Roster]) -> Vec<TeamTotals> {
    rosters
        .iter()
        .map(|roster| {
            let members: Vec<&Activity> = activities
                .iter()
                .filter(|a| roster.contains(&a.user_id))
                .collect();
            TeamTotals {
                team: roster.name.clone(),
                total: duration_sum(members.iter().copied()),
                weighted_total: weighted_duration_sum(members.iter().copied()),
            }
        })
        .collect()
}

/// One leaderboard row.
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    /// Athlete display name as shown in the feed.
    pub display_name: String,
    /// Combined active time for that name.
    pub total: Duration,
}

/// Per-athlete raw totals, longest first.
pub fn leaderboard_by_duration(activities: &[Activity]) -> Vec<LeaderboardEntry> {
    let entries = group_by_display_name(activities)
        .into_iter()
        .map(|(name, group)| LeaderboardEntry {
            display_name: name.to_string(),
            total: duration_sum(group),
        })
        .collect();
    rank(entries)
}

/// Per-athlete weighted totals, longest first.
pub fn leaderboard_by_weighted_duration(activities: &[Activity]) -> Vec<LeaderboardEntry> {
    let entries = group_by_display_name(activities)
        .into_iter()
        .map(|(name, group)| LeaderboardEntry {
            display_name: name.to_string(),
            total: weighted_duration_sum(group),
        })
        .collect();
    rank(entries)
}

/// Group activities by display name, preserving first-seen name order.
///
/// Grouping is by name rather than athlete id, so two athletes sharing a
/// display name merge into one group.
fn group_by_display_name(activities: &[Activity]) -> Vec<(&str, Vec<&Activity>)> {
    let mut groups: Vec<(&str, Vec<&Activity>)> = Vec::new();
    for activity in activities {
        match groups
            .iter_mut()
            .find(|(name, _)| *name == activity.display_name)
        {
            Some((_, group)) => group.push(activity),
            None => groups.push((&activity.display_name, vec![activity])),
        }
    }
    groups
}

/// Sort descending by total. The sort is stable, so equal totals keep
/// first-seen order.
fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.total.cmp(&a.total));
    entries
}
