//! Derived lifecycle statuses and the read views that carry them.

use crate::models::fixture::ScheduledMatch;
use crate::models::tournament::Tournament;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Displayed state of a tournament, computed from its dates at read time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum TournamentStatus {
    Upcoming,
    Live,
    Completed,
    Cancelled,
}

/// Displayed state of a match, computed from its kick-off time at read time.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Cancelled,
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Upcoming => "Upcoming",
            TournamentStatus::Live => "Live",
            TournamentStatus::Completed => "Completed",
            TournamentStatus::Cancelled => "Cancelled",
        }
    }
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::Live => "Live",
            MatchStatus::Completed => "Completed",
            MatchStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status filter does not name a known status.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for TournamentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            TournamentStatus::Upcoming,
            TournamentStatus::Live,
            TournamentStatus::Completed,
            TournamentStatus::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl FromStr for MatchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            MatchStatus::Scheduled,
            MatchStatus::Live,
            MatchStatus::Completed,
            MatchStatus::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Inputs to a tournament's status: its date range and cancellation flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TournamentWindow {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_cancelled: bool,
}

impl TournamentWindow {
    pub fn of(tournament: &Tournament) -> Self {
        Self {
            start_date: tournament.start_date,
            end_date: tournament.end_date,
            is_cancelled: tournament.is_cancelled,
        }
    }
}

/// Inputs to a match's status: kick-off, how long a match lasts, and cancellation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatchWindow {
    pub scheduled_at: DateTime<Utc>,
    pub duration: Duration,
    pub is_cancelled: bool,
}

impl MatchWindow {
    pub fn of(scheduled: &ScheduledMatch, duration: Duration) -> Self {
        Self {
            scheduled_at: scheduled.scheduled_at,
            duration,
            is_cancelled: scheduled.is_cancelled,
        }
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + self.duration
    }
}

/// A tournament as returned by read paths: the stored record plus its status.
#[derive(Clone, Debug, Serialize)]
pub struct TournamentView {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub status: TournamentStatus,
}

/// A match as returned by read paths: the stored record plus its status.
#[derive(Clone, Debug, Serialize)]
pub struct MatchView {
    #[serde(flatten)]
    pub scheduled: ScheduledMatch,
    pub status: MatchStatus,
}
