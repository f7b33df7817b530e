//! Pharmacy-rotation resolver.
//!
//! Each pharmacy carries the list of duty days it covers. Resolution is by
//! first match in input order, which is also the tie-break when the dataset
//! wrongly assigns two pharmacies to the same day; data curation, not this
//! module, is responsible for keeping the rotation one-per-day.

use crate::models::business::Business;
use crate::models::weekday::{DutyDay, ScheduleDay};
use chrono::{Datelike, NaiveDateTime};

/// The pharmacy on duty at `now`, if any.
///
/// `pharmacies` is the already-filtered pharmacy subset of the directory
/// (see `Directory::pharmacies`); passing non-pharmacies here would let them
/// win a duty slot.
pub fn current_on_duty(pharmacies: &[Business], now: NaiveDateTime) -> Option<&Business> {
    let today = DutyDay::from(ScheduleDay::from_weekday(now.weekday()));
    pharmacies.iter().find(|p| p.on_duty(today))
}

/// Full rotation calendar: exactly one entry per day, Sunday-first, paired
/// with the first pharmacy covering that day or `None`.
pub fn weekly_schedule(pharmacies: &[Business]) -> Vec<(DutyDay, Option<&Business>)> {
    DutyDay::ALL
        .iter()
        .map(|day| (*day, pharmacies.iter().find(|p| p.on_duty(*day))))
        .collect()
}
