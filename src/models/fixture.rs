//! Pairings, the scheduling date span, and the scheduled matches produced from them.

use crate::models::participant::{Participant, ParticipantId, ParticipantKind};
use crate::models::tournament::{Ground, SportId, Tournament, TournamentError, TournamentId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Two distinct participants of the same kind who meet once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pairing<P> {
    pub first: P,
    pub second: P,
}

impl<P: Participant> Pairing<P> {
    pub fn new(first: P, second: P) -> Self {
        Self { first, second }
    }
}

/// Inclusive `[start, end]` window a tournament's fixtures are spread over.
///
/// The day budget counts whole days elapsed between `start` and `end`; day
/// `d` is the UTC calendar day `d` days after the day of `start`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateSpan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateSpan {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TournamentError> {
        if start > end {
            return Err(TournamentError::InvalidDateSpan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn of(tournament: &Tournament) -> Result<Self, TournamentError> {
        Self::new(tournament.start_date, tournament.end_date)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// `floor((end - start) / 1 day) + 1`, at least 1.
    pub fn total_days(&self) -> u32 {
        let days = (self.end - self.start).num_days() + 1;
        u32::try_from(days).unwrap_or(u32::MAX).max(1)
    }
}

/// The two sides of a match. Serialized as `team_a`/`team_b` or
/// `player_a`/`player_b` depending on the tournament's registration type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sides {
    Teams { team_a: ParticipantId, team_b: ParticipantId },
    Players { player_a: ParticipantId, player_b: ParticipantId },
}

impl Sides {
    pub fn from_pairing<P: Participant>(pairing: &Pairing<P>) -> Self {
        let (a, b) = (pairing.first.participant_id(), pairing.second.participant_id());
        match pairing.first.kind() {
            ParticipantKind::Team => Sides::Teams { team_a: a, team_b: b },
            ParticipantKind::Player => Sides::Players {
                player_a: a,
                player_b: b,
            },
        }
    }

    pub fn ids(&self) -> (ParticipantId, ParticipantId) {
        match *self {
            Sides::Teams { team_a, team_b } => (team_a, team_b),
            Sides::Players { player_a, player_b } => (player_a, player_b),
        }
    }
}

/// Fields every match of a tournament inherits from it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchTemplate {
    pub tournament_id: TournamentId,
    pub sport_id: SportId,
    pub ground: Option<Ground>,
}

impl MatchTemplate {
    pub fn of(tournament: &Tournament) -> Self {
        Self {
            tournament_id: tournament.id,
            sport_id: tournament.sport_id,
            ground: tournament.ground.clone(),
        }
    }
}

/// A fixture with its assigned kick-off time, ready for storage.
///
/// Created once by fixture generation and never modified by the scheduler;
/// cancellation is toggled by the storage side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub sport_id: SportId,
    pub ground: Option<Ground>,
    #[serde(flatten)]
    pub sides: Sides,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub is_cancelled: bool,
}

impl ScheduledMatch {
    pub fn new(template: &MatchTemplate, sides: Sides, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id: template.tournament_id,
            sport_id: template.sport_id,
            ground: template.ground.clone(),
            sides,
            scheduled_at,
            is_cancelled: false,
        }
    }
}
