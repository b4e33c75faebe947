//! Storage collaborator: where tournaments, rosters and fixtures live.
//!
//! The scheduler only needs [`FixtureStore`]. [`MemoryStore`] is the
//! in-process implementation the web server and tests run on.

use crate::models::{
    MatchId, ParticipantKind, RosterEntry, ScheduledMatch, Tournament, TournamentError,
    TournamentId,
};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub trait FixtureStore {
    fn tournament(&self, id: TournamentId) -> Result<Tournament, TournamentError>;

    /// Approved participants of the tournament, in registration order.
    fn approved_roster(&self, id: TournamentId) -> Result<Vec<RosterEntry>, TournamentError>;

    /// Persist a tournament's fixtures and set its `schedule_generated` flag
    /// as one conditional write.
    ///
    /// Must fail with [`TournamentError::FixturesAlreadyGenerated`], storing
    /// nothing, when the flag is already set. The flag is only set once every
    /// match is stored; on any error it stays unset.
    fn commit_fixtures(
        &self,
        id: TournamentId,
        matches: Vec<ScheduledMatch>,
    ) -> Result<(), TournamentError>;
}

/// Per-tournament entry: tournament data, its approved roster and its fixtures.
#[derive(Clone, Debug)]
struct TournamentEntry {
    tournament: Tournament,
    roster: Vec<RosterEntry>,
    matches: Vec<ScheduledMatch>,
}

type Entries = HashMap<TournamentId, TournamentEntry>;

/// In-memory state: many tournaments by ID behind one lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Entries>,
}

fn lock_error() -> TournamentError {
    TournamentError::Persistence("lock error".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, TournamentError> {
        self.entries.read().map_err(|_| lock_error())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, TournamentError> {
        self.entries.write().map_err(|_| lock_error())
    }

    pub fn insert_tournament(&self, tournament: Tournament) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        g.insert(
            tournament.id,
            TournamentEntry {
                tournament,
                roster: Vec::new(),
                matches: Vec::new(),
            },
        );
        Ok(())
    }

    /// All tournaments, oldest first.
    pub fn tournaments(&self) -> Result<Vec<Tournament>, TournamentError> {
        let g = self.read()?;
        let mut tournaments: Vec<Tournament> =
            g.values().map(|e| e.tournament.clone()).collect();
        tournaments.sort_by_key(|t| (t.created_at, t.id));
        Ok(tournaments)
    }

    /// Record an approved participant. Entries of the wrong kind and repeats are rejected.
    pub fn add_approved(
        &self,
        id: TournamentId,
        entry: RosterEntry,
    ) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        let e = g.get_mut(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        let expected: ParticipantKind = e.tournament.registration_type;
        if entry.kind != expected {
            return Err(TournamentError::WrongParticipantKind {
                expected,
                found: entry.kind,
            });
        }
        if e.roster.iter().any(|r| r.id == entry.id) {
            return Err(TournamentError::DuplicateParticipant(entry.id));
        }
        e.roster.push(entry);
        Ok(())
    }

    pub fn matches(&self, id: TournamentId) -> Result<Vec<ScheduledMatch>, TournamentError> {
        let g = self.read()?;
        let e = g.get(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        Ok(e.matches.clone())
    }

    /// Cancellation toggle; clearing it re-exposes the date-based status.
    pub fn set_tournament_cancelled(
        &self,
        id: TournamentId,
        cancelled: bool,
    ) -> Result<Tournament, TournamentError> {
        let mut g = self.write()?;
        let e = g.get_mut(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        e.tournament.is_cancelled = cancelled;
        Ok(e.tournament.clone())
    }

    pub fn set_match_cancelled(
        &self,
        id: TournamentId,
        match_id: MatchId,
        cancelled: bool,
    ) -> Result<ScheduledMatch, TournamentError> {
        let mut g = self.write()?;
        let e = g.get_mut(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        let m = e
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        m.is_cancelled = cancelled;
        Ok(m.clone())
    }
}

impl FixtureStore for MemoryStore {
    fn tournament(&self, id: TournamentId) -> Result<Tournament, TournamentError> {
        let g = self.read()?;
        g.get(&id)
            .map(|e| e.tournament.clone())
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    fn approved_roster(&self, id: TournamentId) -> Result<Vec<RosterEntry>, TournamentError> {
        let g = self.read()?;
        g.get(&id)
            .map(|e| e.roster.clone())
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    /// The write lock is held across check, insert and flag update.
    fn commit_fixtures(
        &self,
        id: TournamentId,
        matches: Vec<ScheduledMatch>,
    ) -> Result<(), TournamentError> {
        let mut g = self.write()?;
        let e = g.get_mut(&id).ok_or(TournamentError::TournamentNotFound(id))?;
        if e.tournament.schedule_generated {
            return Err(TournamentError::FixturesAlreadyGenerated);
        }
        if let Some(stray) = matches.iter().find(|m| m.tournament_id != id) {
            return Err(TournamentError::Persistence(format!(
                "match {} belongs to tournament {}",
                stray.id, stray.tournament_id
            )));
        }
        e.matches.extend(matches);
        e.tournament.schedule_generated = true;
        Ok(())
    }
}
