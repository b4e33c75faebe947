//! Data structures for the scheduler: participants, tournaments, fixtures, statuses.

mod fixture;
mod participant;
mod status;
mod tournament;

pub use fixture::{DateSpan, MatchId, MatchTemplate, Pairing, ScheduledMatch, Sides};
pub use participant::{Participant, ParticipantId, ParticipantKind, RosterEntry, UserId};
pub use status::{
    MatchStatus, MatchView, MatchWindow, TournamentStatus, TournamentView, TournamentWindow,
    UnknownStatus,
};
pub use tournament::{ErrorKind, Ground, SportId, Tournament, TournamentError, TournamentId};
