//! Slot allocation: spread pairings over the days of a tournament.
//!
//! Every day gets at most `ceil(pairings / days)` matches, so the whole list
//! always fits inside the span. Within a day, slots start at the policy's
//! start hour and are `slot_spacing_hours` apart; when that would push a slot
//! past midnight the spacing is compressed so the day's last slot still
//! starts on the same day.

use crate::config::SlotPolicy;
use crate::models::{
    DateSpan, MatchTemplate, Pairing, Participant, ScheduledMatch, Sides, TournamentError,
};
use chrono::{DateTime, Days, Duration, NaiveTime, Utc};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// How a given number of pairings is laid out over a span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotPlan {
    pub total_days: u32,
    pub matches_per_day: u32,
    /// Minutes between consecutive slots after compression.
    pub spacing_minutes: i64,
    pub first_slot_minute: i64,
}

impl SlotPlan {
    pub fn new(pairing_count: usize, span: &DateSpan, policy: &SlotPolicy) -> Self {
        let total_days = span.total_days();
        let count = u32::try_from(pairing_count).unwrap_or(u32::MAX);
        let matches_per_day = count.div_ceil(total_days).max(1);

        let first_slot_minute = i64::from(policy.daily_start_hour) * 60;
        let requested = i64::from(policy.slot_spacing_hours) * 60;
        let last_slot_minute = first_slot_minute + i64::from(matches_per_day - 1) * requested;
        let spacing_minutes = if last_slot_minute < MINUTES_PER_DAY {
            requested
        } else {
            (MINUTES_PER_DAY - first_slot_minute) / i64::from(matches_per_day)
        };

        Self {
            total_days,
            matches_per_day,
            spacing_minutes,
            first_slot_minute,
        }
    }

    /// `(day, slot)` for the pairing at `index`.
    pub fn position(&self, index: usize) -> (u32, u32) {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        (index / self.matches_per_day, index % self.matches_per_day)
    }

    /// Days actually used by `pairing_count` pairings.
    pub fn days_used(&self, pairing_count: usize) -> u32 {
        let count = u32::try_from(pairing_count).unwrap_or(u32::MAX);
        count.div_ceil(self.matches_per_day)
    }

    fn kick_off(
        &self,
        span: &DateSpan,
        day: u32,
        slot: u32,
    ) -> Result<DateTime<Utc>, TournamentError> {
        let date = span
            .first_day()
            .checked_add_days(Days::new(u64::from(day)))
            .ok_or(TournamentError::InvalidDateSpan {
                start: span.start(),
                end: span.end(),
            })?;
        let minute = self.first_slot_minute + i64::from(slot) * self.spacing_minutes;
        Ok(date.and_time(NaiveTime::MIN).and_utc() + Duration::minutes(minute))
    }
}

/// Give every pairing a kick-off time, in pairing order.
///
/// Pairing `i` lands on day `i / matches_per_day`, slot `i % matches_per_day`.
/// Trailing slots of the last used day stay empty.
pub fn allocate_slots<P: Participant>(
    pairings: &[Pairing<P>],
    span: &DateSpan,
    policy: &SlotPolicy,
    template: &MatchTemplate,
) -> Result<Vec<ScheduledMatch>, TournamentError> {
    if pairings.is_empty() {
        return Err(TournamentError::NoPairingsToSchedule);
    }
    policy.validate()?;

    let plan = SlotPlan::new(pairings.len(), span, policy);
    log::debug!(
        "Allocating {} pairings: {} day(s), {} per day, {} min apart",
        pairings.len(),
        plan.total_days,
        plan.matches_per_day,
        plan.spacing_minutes
    );

    pairings
        .iter()
        .enumerate()
        .map(|(index, pairing)| {
            let (day, slot) = plan.position(index);
            let scheduled_at = plan.kick_off(span, day, slot)?;
            Ok(ScheduledMatch::new(template, Sides::from_pairing(pairing), scheduled_at))
        })
        .collect()
}
