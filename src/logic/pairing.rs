//! Round-robin pairing: everyone plays everyone once.

use crate::models::{Pairing, Participant, TournamentError};

/// Fewest participants that can form a fixture.
pub const MIN_PARTICIPANTS: usize = 2;

/// Pair every participant with every later one, in input order.
///
/// Participant 0 meets 1, 2, 3, ... before participant 1 meets 2, 3, ...;
/// slot allocation relies on this order, so reordering the input changes the
/// schedule. Yields `n * (n - 1) / 2` pairings.
pub fn generate_pairings<P: Participant>(
    participants: &[P],
) -> Result<Vec<Pairing<P>>, TournamentError> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(TournamentError::InsufficientParticipants {
            required: MIN_PARTICIPANTS,
            found: participants.len(),
        });
    }
    let kind = participants[0].kind();
    if participants.iter().any(|p| p.kind() != kind) {
        return Err(TournamentError::MixedParticipantKinds);
    }
    for (i, p) in participants.iter().enumerate() {
        let id = p.participant_id();
        if participants[..i].iter().any(|q| q.participant_id() == id) {
            return Err(TournamentError::DuplicateParticipant(id));
        }
    }

    let n = participants.len();
    let mut pairings = Vec::with_capacity(n * (n - 1) / 2);
    for (i, first) in participants.iter().enumerate() {
        for second in &participants[i + 1..] {
            pairings.push(Pairing::new(first.clone(), second.clone()));
        }
    }
    Ok(pairings)
}
