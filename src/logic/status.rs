//! Status derivation: the lifecycle state of tournaments and matches is never
//! stored, it is recomputed from timestamps on every read.

use crate::models::{
    MatchStatus, MatchView, MatchWindow, ScheduledMatch, Tournament, TournamentStatus,
    TournamentView, TournamentWindow,
};
use chrono::{DateTime, Duration, Utc};

/// Cancelled wins over dates; then Completed after `end_date`, Live inside
/// `[start_date, end_date]`, Upcoming before.
pub fn derive_tournament_status(
    window: &TournamentWindow,
    now: DateTime<Utc>,
) -> TournamentStatus {
    if window.is_cancelled {
        TournamentStatus::Cancelled
    } else if now > window.end_date {
        TournamentStatus::Completed
    } else if now >= window.start_date {
        TournamentStatus::Live
    } else {
        TournamentStatus::Upcoming
    }
}

/// Same precedence as tournaments, over `[scheduled_at, scheduled_at + duration]`.
pub fn derive_match_status(window: &MatchWindow, now: DateTime<Utc>) -> MatchStatus {
    if window.is_cancelled {
        MatchStatus::Cancelled
    } else if now > window.ends_at() {
        MatchStatus::Completed
    } else if now >= window.scheduled_at {
        MatchStatus::Live
    } else {
        MatchStatus::Scheduled
    }
}

pub fn tournament_view(tournament: &Tournament, now: DateTime<Utc>) -> TournamentView {
    TournamentView {
        status: derive_tournament_status(&TournamentWindow::of(tournament), now),
        tournament: tournament.clone(),
    }
}

pub fn match_view(
    scheduled: &ScheduledMatch,
    duration: Duration,
    now: DateTime<Utc>,
) -> MatchView {
    MatchView {
        status: derive_match_status(&MatchWindow::of(scheduled, duration), now),
        scheduled: scheduled.clone(),
    }
}
