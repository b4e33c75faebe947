//! Tournament record and TournamentError.

use crate::models::participant::{ParticipantId, ParticipantKind, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Identifier of the sport a tournament is played in.
pub type SportId = Uuid;

/// Broad class of a [`TournamentError`], used by callers to pick a response.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed or missing input. Never retried.
    Validation,
    /// A business rule rejects the request: already generated, too few
    /// participants, or not the owner.
    PreconditionFailed,
    /// The tournament or match does not exist.
    NotFound,
    /// The storage collaborator failed to write; the caller may retry.
    Persistence,
}

/// Errors that can occur during tournament scheduling operations.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TournamentError {
    #[error("Start date {start} is after end date {end}")]
    InvalidDateSpan {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("There are no pairings to schedule")]
    NoPairingsToSchedule,
    #[error("Invalid slot policy: {0}")]
    InvalidSlotPolicy(&'static str),
    #[error("The roster has no approved participants")]
    EmptyRoster,
    #[error("All participants must be of the same kind")]
    MixedParticipantKinds,
    #[error("Tournament accepts {expected} registrations, got a {found}")]
    WrongParticipantKind {
        expected: ParticipantKind,
        found: ParticipantKind,
    },
    #[error("Participant {0} appears more than once in the roster")]
    DuplicateParticipant(ParticipantId),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Need at least {required} approved participants to generate fixtures (found {found})")]
    InsufficientParticipants { required: usize, found: usize },
    #[error("Fixtures have already been generated for this tournament")]
    FixturesAlreadyGenerated,
    #[error("Only the tournament organizer can do this")]
    NotTournamentOwner,
    #[error("No tournament")]
    TournamentNotFound(TournamentId),
    #[error("Match not found")]
    MatchNotFound(Uuid),
    #[error("Storage failure: {0}")]
    Persistence(String),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            InvalidDateSpan { .. }
            | NoPairingsToSchedule
            | InvalidSlotPolicy(_)
            | EmptyRoster
            | MixedParticipantKinds
            | WrongParticipantKind { .. }
            | DuplicateParticipant(_)
            | MissingField(_) => ErrorKind::Validation,
            InsufficientParticipants { .. } | FixturesAlreadyGenerated | NotTournamentOwner => {
                ErrorKind::PreconditionFailed
            }
            TournamentNotFound(_) | MatchNotFound(_) => ErrorKind::NotFound,
            Persistence(_) => ErrorKind::Persistence,
        }
    }
}

/// Free-form venue descriptor copied onto every scheduled match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    pub name: String,
    /// Address or city, if the organizer gave one.
    #[serde(default)]
    pub location: Option<String>,
}

/// A tournament as stored by the application.
///
/// There is no lifecycle status field: the displayed status is derived from
/// the dates and `is_cancelled` on every read.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// The organizer who owns this tournament and may generate its fixtures.
    pub organizer_id: UserId,
    pub sport_id: SportId,
    pub ground: Option<Ground>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Kind of participant that registers; fixed for the tournament's lifetime.
    pub registration_type: ParticipantKind,
    /// Set once fixtures are persisted; never cleared.
    pub schedule_generated: bool,
    pub is_cancelled: bool,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a tournament. Name must be non-empty and `start_date <= end_date`.
    pub fn new(
        name: impl Into<String>,
        organizer_id: UserId,
        sport_id: SportId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        registration_type: ParticipantKind,
    ) -> Result<Self, TournamentError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::MissingField("name"));
        }
        if start_date > end_date {
            return Err(TournamentError::InvalidDateSpan {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            organizer_id,
            sport_id,
            ground: None,
            start_date,
            end_date,
            registration_type,
            schedule_generated: false,
            is_cancelled: false,
            created_at: Utc::now(),
        })
    }

    pub fn with_ground(self, ground: Ground) -> Self {
        Self {
            ground: Some(ground),
            ..self
        }
    }

    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.organizer_id == user
    }
}
