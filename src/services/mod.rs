// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Business logic services

pub mod aggregate;
pub mod duration;
pub mod feed;
pub mod parse;
pub mod walker;

pub use aggregate::{
    leaderboard_by_duration, leaderboard_by_weighted_duration, team_totals, LeaderboardEntry,
    TeamTotals,
};
pub use feed::{FeedClient, FeedSource};
pub use parse::parse_feed_page;
pub use walker::FeedWalker;
