//! Weekly opening-hours data model.
//!
//! A day has exactly two shift slots, `morning` and `afternoon`. A slot is
//! either the `Cerrado` sentinel or a raw range string such as
//! `"07:00 AM - 01:00 PM"`. Range strings are kept unparsed here and only
//! interpreted by the hours evaluator, which treats anything malformed as
//! closed.

use super::weekday::ScheduleDay;
use serde::{Deserialize, Serialize};

/// Sentinel value marking a closed shift slot in the dataset.
pub const CLOSED_SENTINEL: &str = "Cerrado";

/// One shift slot: closed, or a 12-hour clock range string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Shift {
    Closed,
    Range(String),
}

impl Shift {
    pub fn is_closed(&self) -> bool {
        matches!(self, Shift::Closed)
    }

    /// Display form: the range string, or the closed sentinel.
    pub fn display(&self) -> &str {
        match self {
            Shift::Closed => CLOSED_SENTINEL,
            Shift::Range(r) => r,
        }
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift::Closed
    }
}

impl From<String> for Shift {
    fn from(s: String) -> Self {
        if s.trim() == CLOSED_SENTINEL {
            Shift::Closed
        } else {
            Shift::Range(s)
        }
    }
}

impl From<Shift> for String {
    fn from(s: Shift) -> Self {
        s.display().to_string()
    }
}

/// The two shift slots of a single day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(default)]
    pub morning: Shift,
    #[serde(default)]
    pub afternoon: Shift,
}

impl DaySchedule {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Continuous day: open through a single slot, no split shift.
    pub fn is_continuous(&self) -> bool {
        !self.morning.is_closed() && self.afternoon.is_closed()
    }
}

/// Fixed seven-day schedule record.
///
/// Every day is present; a day missing from the dataset deserializes to a
/// closed DaySchedule. Access goes through [`WeeklySchedule::day`] so there
/// is no stringly-typed lookup anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub sunday: DaySchedule,
    #[serde(default)]
    pub monday: DaySchedule,
    #[serde(default)]
    pub tuesday: DaySchedule,
    #[serde(default)]
    pub wednesday: DaySchedule,
    #[serde(default)]
    pub thursday: DaySchedule,
    #[serde(default)]
    pub friday: DaySchedule,
    #[serde(default)]
    pub saturday: DaySchedule,
}

impl WeeklySchedule {
    pub fn day(&self, day: ScheduleDay) -> &DaySchedule {
        match day {
            ScheduleDay::Sunday => &self.sunday,
            ScheduleDay::Monday => &self.monday,
            ScheduleDay::Tuesday => &self.tuesday,
            ScheduleDay::Wednesday => &self.wednesday,
            ScheduleDay::Thursday => &self.thursday,
            ScheduleDay::Friday => &self.friday,
            ScheduleDay::Saturday => &self.saturday,
        }
    }

    pub fn day_mut(&mut self, day: ScheduleDay) -> &mut DaySchedule {
        match day {
            ScheduleDay::Sunday => &mut self.sunday,
            ScheduleDay::Monday => &mut self.monday,
            ScheduleDay::Tuesday => &mut self.tuesday,
            ScheduleDay::Wednesday => &mut self.wednesday,
            ScheduleDay::Thursday => &mut self.thursday,
            ScheduleDay::Friday => &mut self.friday,
            ScheduleDay::Saturday => &mut self.saturday,
        }
    }
}
