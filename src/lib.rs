//! Sports tournament web app: library with models, the fixture scheduling engine and storage.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::{ServerConfig, SlotPolicy};
pub use logic::{
    allocate_slots, derive_match_status, derive_tournament_status, generate_fixtures,
    generate_pairings, match_view, schedule_tournament, tournament_view, SlotPlan,
    MIN_PARTICIPANTS,
};
pub use models::{
    DateSpan, ErrorKind, Ground, MatchId, MatchStatus, MatchTemplate, MatchView, MatchWindow,
    Pairing, Participant, ParticipantId, ParticipantKind, RosterEntry, ScheduledMatch, Sides,
    SportId, Tournament, TournamentError, TournamentId, TournamentStatus, TournamentView,
    TournamentWindow, UnknownStatus, UserId,
};
pub use store::{FixtureStore, MemoryStore};
