//! Runtime configuration read from the environment.
//!
//! Server: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Scheduling: DAILY_START_HOUR, SLOT_SPACING_HOURS, MATCH_DURATION_HOURS.
//! Missing or unparsable values fall back to the defaults.

use crate::models::TournamentError;
use chrono::Duration;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Where the web server listens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
            port: env_or("PORT", default_port()),
        }
    }
}

/// How matches are laid out within a day, and how long one lasts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotPolicy {
    /// Hour of day (UTC) of the first slot.
    pub daily_start_hour: u32,
    /// Hours between consecutive slots on the same day.
    pub slot_spacing_hours: u32,
    /// Length of a match, used for its Live window.
    pub match_duration_hours: u32,
}

impl Default for SlotPolicy {
    /// First match at 10:00, one every 3 hours; spacing equals match length so slots never overlap.
    fn default() -> Self {
        Self {
            daily_start_hour: 10,
            slot_spacing_hours: 3,
            match_duration_hours: 3,
        }
    }
}

impl SlotPolicy {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            daily_start_hour: env_or("DAILY_START_HOUR", defaults.daily_start_hour),
            slot_spacing_hours: env_or("SLOT_SPACING_HOURS", defaults.slot_spacing_hours),
            match_duration_hours: env_or("MATCH_DURATION_HOURS", defaults.match_duration_hours),
        }
    }

    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.daily_start_hour >= 24 {
            return Err(TournamentError::InvalidSlotPolicy(
                "daily start hour must be between 0 and 23",
            ));
        }
        if self.slot_spacing_hours == 0 {
            return Err(TournamentError::InvalidSlotPolicy(
                "slot spacing must be at least one hour",
            ));
        }
        if self.match_duration_hours == 0 {
            return Err(TournamentError::InvalidSlotPolicy(
                "match duration must be at least one hour",
            ));
        }
        Ok(())
    }

    pub fn match_duration(&self) -> Duration {
        Duration::hours(i64::from(self.match_duration_hours))
    }
}
