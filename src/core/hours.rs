//! Opening-hours evaluator.
//!
//! Decides whether a weekly schedule is open at a given instant. Shift
//! boundaries are 12-hour clock strings ("07:00 AM"); a range *end* of
//! `12:00 AM` means minute 1440 (closing at midnight), while the same token
//! as a range *start* stays minute 0. Anything malformed makes that window
//! never match: the evaluator fails closed and never panics.

use crate::models::schedule::{DaySchedule, Shift, WeeklySchedule};
use crate::models::weekday::ScheduleDay;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Minute 1440, the end-of-day closing time encoded as "12:00 AM".
pub const CLOSE_OF_DAY: u32 = 24 * 60;

/// True when `hours` is open at `now` (local calendar day and wall time).
///
/// A day whose `morning` slot is closed counts as closed for the whole day,
/// whatever `afternoon` says.
pub fn is_open_now(hours: &WeeklySchedule, now: NaiveDateTime) -> bool {
    let today = hours.day(ScheduleDay::from_weekday(now.weekday()));
    let minute = now.hour() * 60 + now.minute();
    is_open_at(today, minute)
}

/// Same decision against an already-extracted day and minute-of-day.
pub fn is_open_at(day: &DaySchedule, minute: u32) -> bool {
    let morning = match &day.morning {
        Shift::Closed => return false,
        Shift::Range(r) => r,
    };

    let in_morning = parse_range(morning).is_some_and(|(s, e)| within(s, e, minute));

    match &day.afternoon {
        // horario continuo
        Shift::Closed => in_morning,
        // horario partido
        Shift::Range(r) => {
            in_morning || parse_range(r).is_some_and(|(s, e)| within(s, e, minute))
        }
    }
}

/// `start <= minute <= end`, with the midnight rule: an end of 1440 keeps
/// the window open from `start` through 23:59.
fn within(start: u32, end: u32, minute: u32) -> bool {
    if end == CLOSE_OF_DAY {
        minute >= start
    } else {
        minute >= start && minute <= end
    }
}

/// Parse `"HH:MM AM - HH:MM PM"` into minutes-since-midnight endpoints.
///
/// Only the *end* position promotes `12:00 AM` to 1440; a start of
/// `12:00 AM` stays 0, and `12:30 AM` is not special in either position.
fn parse_range(range: &str) -> Option<(u32, u32)> {
    let (start_str, end_str) = range.split_once(" - ")?;
    let start = parse_clock(start_str)?;
    let end = match parse_clock(end_str)? {
        0 => CLOSE_OF_DAY,
        e => e,
    };
    Some((start, end))
}

/// Parse a single `"HH:MM AM"` token into minutes-since-midnight.
/// `12:xx AM` maps to 0..59, `12:xx PM` to 720..779.
fn parse_clock(token: &str) -> Option<u32> {
    let (time, period) = token.trim().split_once(' ')?;

    let (hour_str, minute_str) = match time.split_once(':') {
        Some((h, m)) => (h, m),
        None => (time, "0"),
    };
    let hour: u32 = hour_str.parse().ok()?;
    let minute: u32 = minute_str.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour24 = match period.trim() {
        "AM" => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        "PM" => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        _ => return None,
    };

    Some(hour24 * 60 + minute)
}
