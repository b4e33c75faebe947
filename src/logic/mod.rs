//! Scheduling logic: pairing, slot allocation, status derivation, fixture generation.

mod fixtures;
mod pairing;
mod slots;
mod status;

pub use fixtures::{generate_fixtures, schedule_tournament};
pub use pairing::{generate_pairings, MIN_PARTICIPANTS};
pub use slots::{allocate_slots, SlotPlan};
pub use status::{derive_match_status, derive_tournament_status, match_view, tournament_view};
