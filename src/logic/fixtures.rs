//! Fixture generation: check preconditions, pair the roster, allocate slots, persist.

use crate::config::SlotPolicy;
use crate::logic::pairing::{generate_pairings, MIN_PARTICIPANTS};
use crate::logic::slots::{allocate_slots, SlotPlan};
use crate::models::{
    DateSpan, MatchTemplate, Participant, ScheduledMatch, Tournament, TournamentError,
    TournamentId, UserId,
};
use crate::store::FixtureStore;

/// Build the full fixture list for a tournament without storing anything.
///
/// Fails before generating if `caller` is not the organizer, fixtures already
/// exist, or the roster is empty, of the wrong kind, repeats a participant or
/// has fewer than 2 entries.
pub fn generate_fixtures<P: Participant>(
    tournament: &Tournament,
    roster: &[P],
    caller: UserId,
    policy: &SlotPolicy,
) -> Result<Vec<ScheduledMatch>, TournamentError> {
    if !tournament.is_owned_by(caller) {
        return Err(TournamentError::NotTournamentOwner);
    }
    if tournament.schedule_generated {
        return Err(TournamentError::FixturesAlreadyGenerated);
    }
    if roster.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    let expected = tournament.registration_type;
    if let Some(p) = roster.iter().find(|p| p.kind() != expected) {
        return Err(TournamentError::WrongParticipantKind {
            expected,
            found: p.kind(),
        });
    }
    if roster.len() < MIN_PARTICIPANTS {
        return Err(TournamentError::InsufficientParticipants {
            required: MIN_PARTICIPANTS,
            found: roster.len(),
        });
    }

    let span = DateSpan::of(tournament)?;
    let pairings = generate_pairings(roster)?;
    allocate_slots(&pairings, &span, policy, &MatchTemplate::of(tournament))
}

/// Generate a stored tournament's fixtures and persist them.
///
/// The `schedule_generated` flag is set by the store in the same write as the
/// matches, so a concurrent second request fails with
/// [`TournamentError::FixturesAlreadyGenerated`] and a failed write leaves
/// nothing behind.
pub fn schedule_tournament<S: FixtureStore + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
    caller: UserId,
    policy: &SlotPolicy,
) -> Result<Vec<ScheduledMatch>, TournamentError> {
    let tournament = store.tournament(tournament_id)?;
    let roster = store.approved_roster(tournament_id)?;
    let matches = generate_fixtures(&tournament, &roster, caller, policy)?;

    let plan = SlotPlan::new(matches.len(), &DateSpan::of(&tournament)?, policy);

    store.commit_fixtures(tournament_id, matches.clone())?;

    log::info!(
        "Generated {} fixture(s) for tournament {} over {} of {} day(s)",
        matches.len(),
        tournament_id,
        plan.days_used(matches.len()),
        plan.total_days
    );
    Ok(matches)
}
