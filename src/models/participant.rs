//! Participants: the opaque team or player identifiers a tournament schedules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a team or a player (user). Opaque to the scheduler.
pub type ParticipantId = Uuid;

/// Identifier of an application user (organizer, manager, player).
pub type UserId = Uuid;

/// Whether a tournament is contested by teams or by individual players.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    #[default]
    Team,
    Player,
}

impl std::fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantKind::Team => write!(f, "team"),
            ParticipantKind::Player => write!(f, "player"),
        }
    }
}

/// Anything the pairing and slot logic can schedule.
///
/// Team and player tournaments share one algorithm; only the identifier and
/// its kind matter.
pub trait Participant: Clone {
    fn participant_id(&self) -> ParticipantId;
    fn kind(&self) -> ParticipantKind;
}

/// One approved entry of a tournament roster, as handed over by the roster
/// collaborator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: ParticipantId,
    pub kind: ParticipantKind,
}

impl RosterEntry {
    pub fn new(id: ParticipantId, kind: ParticipantKind) -> Self {
        Self { id, kind }
    }

    pub fn team(id: ParticipantId) -> Self {
        Self::new(id, ParticipantKind::Team)
    }

    pub fn player(id: ParticipantId) -> Self {
        Self::new(id, ParticipantKind::Player)
    }
}

impl Participant for RosterEntry {
    fn participant_id(&self) -> ParticipantId {
        self.id
    }

    fn kind(&self) -> ParticipantKind {
        self.kind
    }
}
