//! Integration tests for tournament and match status derivation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sports_tournament_web::{
    derive_match_status, derive_tournament_status, match_view, tournament_view, MatchStatus,
    MatchTemplate, MatchWindow, ParticipantKind, ScheduledMatch, Sides, Tournament,
    TournamentStatus, TournamentWindow,
};
use uuid::Uuid;

fn at(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 10, h, 0, 0).unwrap()
}

fn window(start: DateTime<Utc>, end: DateTime<Utc>, is_cancelled: bool) -> TournamentWindow {
    TournamentWindow {
        start_date: start,
        end_date: end,
        is_cancelled,
    }
}

fn one_tick() -> Duration {
    Duration::nanoseconds(1)
}

#[test]
fn tournament_follows_the_clock() {
    let w = window(at(10), at(20), false);
    assert_eq!(derive_tournament_status(&w, at(9)), TournamentStatus::Upcoming);
    assert_eq!(derive_tournament_status(&w, at(10)), TournamentStatus::Live);
    assert_eq!(derive_tournament_status(&w, at(15)), TournamentStatus::Live);
    assert_eq!(derive_tournament_status(&w, at(20)), TournamentStatus::Live);
    assert_eq!(derive_tournament_status(&w, at(21)), TournamentStatus::Completed);
}

#[test]
fn single_instant_span_boundaries() {
    let now = at(12);
    let w = window(now, now, false);
    assert_eq!(derive_tournament_status(&w, now), TournamentStatus::Live);
    assert_eq!(
        derive_tournament_status(&w, now + one_tick()),
        TournamentStatus::Completed
    );
    assert_eq!(
        derive_tournament_status(&w, now - one_tick()),
        TournamentStatus::Upcoming
    );
}

#[test]
fn cancellation_wins_over_any_dates() {
    for (start, end) in [(at(1), at(2)), (at(5), at(20)), (at(22), at(23))] {
        let w = window(start, end, true);
        for h in 0..24 {
            assert_eq!(derive_tournament_status(&w, at(h)), TournamentStatus::Cancelled);
        }
    }
}

#[test]
fn clearing_cancellation_restores_date_status() {
    let mut w = window(at(10), at(20), true);
    assert_eq!(derive_tournament_status(&w, at(15)), TournamentStatus::Cancelled);
    w.is_cancelled = false;
    assert_eq!(derive_tournament_status(&w, at(15)), TournamentStatus::Live);
}

#[test]
fn match_is_live_for_its_duration() {
    let w = MatchWindow {
        scheduled_at: at(10),
        duration: Duration::hours(3),
        is_cancelled: false,
    };
    assert_eq!(derive_match_status(&w, at(9)), MatchStatus::Scheduled);
    assert_eq!(derive_match_status(&w, at(10)), MatchStatus::Live);
    assert_eq!(derive_match_status(&w, at(13)), MatchStatus::Live);
    assert_eq!(
        derive_match_status(&w, at(13) + one_tick()),
        MatchStatus::Completed
    );
}

#[test]
fn cancelled_match_stays_cancelled() {
    let w = MatchWindow {
        scheduled_at: at(10),
        duration: Duration::hours(3),
        is_cancelled: true,
    };
    for h in [0, 10, 12, 23] {
        assert_eq!(derive_match_status(&w, at(h)), MatchStatus::Cancelled);
    }
}

#[test]
fn views_attach_status_to_records() {
    let t = Tournament::new(
        "Spring Cup",
        Uuid::new_v4(),
        Uuid::new_v4(),
        at(10),
        at(20),
        ParticipantKind::Team,
    )
    .unwrap();
    assert_eq!(tournament_view(&t, at(5)).status, TournamentStatus::Upcoming);

    let m = ScheduledMatch::new(
        &MatchTemplate::of(&t),
        Sides::Teams {
            team_a: Uuid::new_v4(),
            team_b: Uuid::new_v4(),
        },
        at(11),
    );
    let view = match_view(&m, Duration::hours(3), at(12));
    assert_eq!(view.status, MatchStatus::Live);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"], "Live");
    assert!(json.get("team_a").is_some());
}

#[test]
fn status_filters_parse_case_insensitively() {
    assert_eq!("live".parse::<TournamentStatus>(), Ok(TournamentStatus::Live));
    assert_eq!("Upcoming".parse::<TournamentStatus>(), Ok(TournamentStatus::Upcoming));
    assert_eq!("SCHEDULED".parse::<MatchStatus>(), Ok(MatchStatus::Scheduled));
    assert!("upcoming".parse::<MatchStatus>().is_err());
    assert_eq!(TournamentStatus::Cancelled.to_string(), "Cancelled");
}
