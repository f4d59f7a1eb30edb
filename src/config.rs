//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; nothing consults the environment
//! after `from_env` returns. The loaded struct is passed by reference to
//! whatever needs it.

use crate::models::Roster;
use std::env;

/// Default start of the scoring window: 2021-04-01 midnight US/Eastern.
pub const DEFAULT_WINDOW_START_EPOCH: i64 = 1_617_249_600;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava club whose feed is scraped
    pub club_id: String,
    /// `_strava4_session` cookie value for an authenticated web session
    pub session_cookie: String,
    /// Team rosters, in display order
    pub rosters: Vec<Roster>,
    /// Activities at or before this instant do not count
    pub window_start_epoch: i64,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            club_id: "123456".to_string(),
            session_cookie: "test_session_cookie".to_string(),
            rosters: vec![
                Roster::from_csv("Team Captain America", "101,102"),
                Roster::from_csv("Team Iron Man", "201,202"),
            ],
            window_start_epoch: DEFAULT_WINDOW_START_EPOCH,
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Roster variables hold comma-separated athlete IDs. A missing or
    /// empty credential/roster is fatal here, before any request is served.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            club_id: require("CLUB_ID")?,
            session_cookie: require("STRAVA_SESSION_COOKIE")?,
            rosters: vec![
                roster_from_env("Team Captain America", "TEAM_CAPTAIN_AMERICA")?,
                roster_from_env("Team Iron Man", "TEAM_IRON_MAN")?,
            ],
            window_start_epoch: match env::var("WINDOW_START_EPOCH") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("WINDOW_START_EPOCH", raw))?,
                Err(_) => DEFAULT_WINDOW_START_EPOCH,
            },
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }
}

/// Read a required, non-empty environment variable.
fn require(name: &'static str) -> Result<String, ConfigError> {
    let value = env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))?;
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }
    Ok(value)
}

/// Read one team's roster from a comma-separated ID list.
fn roster_from_env(team: &str, name: &'static str) -> Result<Roster, ConfigError> {
    let roster = Roster::from_csv(team, &require(name)?);
    if roster.is_empty() {
        return Err(ConfigError::Invalid(name, "no athlete ids".to_string()));
    }
    Ok(roster)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
