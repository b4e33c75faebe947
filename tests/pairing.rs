//! Integration tests for round-robin pairing generation.

use sports_tournament_web::{
    generate_pairings, Pairing, Participant, ParticipantId, RosterEntry, TournamentError,
};
use std::collections::HashSet;
use uuid::Uuid;

fn unordered_ids(p: &Pairing<RosterEntry>) -> (ParticipantId, ParticipantId) {
    if p.first.id <= p.second.id {
        (p.first.id, p.second.id)
    } else {
        (p.second.id, p.first.id)
    }
}

fn teams(n: usize) -> Vec<RosterEntry> {
    (0..n).map(|_| RosterEntry::team(Uuid::new_v4())).collect()
}

#[test]
fn every_pair_exactly_once() {
    for n in 2..=12 {
        let roster = teams(n);
        let pairings = generate_pairings(&roster).unwrap();
        assert_eq!(pairings.len(), n * (n - 1) / 2, "n = {n}");

        let unique: HashSet<(ParticipantId, ParticipantId)> =
            pairings.iter().map(unordered_ids).collect();
        assert_eq!(unique.len(), pairings.len(), "duplicate pairing for n = {n}");
        assert!(pairings
            .iter()
            .all(|p| p.first.participant_id() != p.second.participant_id()));
    }
}

#[test]
fn order_follows_roster_order() {
    let roster = teams(4);
    let ids: Vec<_> = generate_pairings(&roster)
        .unwrap()
        .iter()
        .map(|p| (p.first.id, p.second.id))
        .collect();
    let (a, b, c, d) = (roster[0].id, roster[1].id, roster[2].id, roster[3].id);
    assert_eq!(ids, vec![(a, b), (a, c), (a, d), (b, c), (b, d), (c, d)]);
}

#[test]
fn same_input_same_output() {
    let roster = teams(7);
    assert_eq!(
        generate_pairings(&roster).unwrap(),
        generate_pairings(&roster).unwrap()
    );
}

#[test]
fn each_participant_meets_everyone_else() {
    let roster = teams(6);
    let pairings = generate_pairings(&roster).unwrap();
    for entry in &roster {
        let meetings = pairings
            .iter()
            .filter(|p| p.first.id == entry.id || p.second.id == entry.id)
            .count();
        assert_eq!(meetings, 5);
    }
}

#[test]
fn fewer_than_two_is_rejected() {
    assert_eq!(
        generate_pairings::<RosterEntry>(&[]),
        Err(TournamentError::InsufficientParticipants {
            required: 2,
            found: 0
        })
    );
    assert_eq!(
        generate_pairings(&teams(1)),
        Err(TournamentError::InsufficientParticipants {
            required: 2,
            found: 1
        })
    );
}

#[test]
fn mixed_kinds_are_rejected() {
    let roster = vec![
        RosterEntry::team(Uuid::new_v4()),
        RosterEntry::player(Uuid::new_v4()),
        RosterEntry::team(Uuid::new_v4()),
    ];
    assert_eq!(
        generate_pairings(&roster),
        Err(TournamentError::MixedParticipantKinds)
    );
}

#[test]
fn repeated_participant_is_rejected() {
    let id = Uuid::new_v4();
    let roster = vec![
        RosterEntry::player(id),
        RosterEntry::player(Uuid::new_v4()),
        RosterEntry::player(id),
    ];
    assert_eq!(
        generate_pairings(&roster),
        Err(TournamentError::DuplicateParticipant(id))
    );
}
