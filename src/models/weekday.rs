//! The two day-name domains of the directory.
//!
//! Opening-hours schedules are keyed by lowercase English day names
//! ("sunday" … "saturday"), while the pharmacy rotation uses the capitalized
//! Spanish names printed to users ("Domingo" … "Sábado"). They are kept as
//! two separate enums with a single conversion point (`DutyDay::from`);
//! sharing one type between them is a latent source of bugs.
//!
//! Both domains are Sunday-first, matching the dataset.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Key of a day inside a weekly opening-hours schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl ScheduleDay {
    /// Sunday-first canonical order.
    pub const ALL: [ScheduleDay; 7] = [
        ScheduleDay::Sunday,
        ScheduleDay::Monday,
        ScheduleDay::Tuesday,
        ScheduleDay::Wednesday,
        ScheduleDay::Thursday,
        ScheduleDay::Friday,
        ScheduleDay::Saturday,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ScheduleDay::Sunday => "sunday",
            ScheduleDay::Monday => "monday",
            ScheduleDay::Tuesday => "tuesday",
            ScheduleDay::Wednesday => "wednesday",
            ScheduleDay::Thursday => "thursday",
            ScheduleDay::Friday => "friday",
            ScheduleDay::Saturday => "saturday",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "sunday" => Some(ScheduleDay::Sunday),
            "monday" => Some(ScheduleDay::Monday),
            "tuesday" => Some(ScheduleDay::Tuesday),
            "wednesday" => Some(ScheduleDay::Wednesday),
            "thursday" => Some(ScheduleDay::Thursday),
            "friday" => Some(ScheduleDay::Friday),
            "saturday" => Some(ScheduleDay::Saturday),
            _ => None,
        }
    }

    /// Calendar weekday → schedule key.
    pub fn from_weekday(w: Weekday) -> Self {
        match w {
            Weekday::Sun => ScheduleDay::Sunday,
            Weekday::Mon => ScheduleDay::Monday,
            Weekday::Tue => ScheduleDay::Tuesday,
            Weekday::Wed => ScheduleDay::Wednesday,
            Weekday::Thu => ScheduleDay::Thursday,
            Weekday::Fri => ScheduleDay::Friday,
            Weekday::Sat => ScheduleDay::Saturday,
        }
    }
}

/// Day name as used by the pharmacy rotation and in user-facing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DutyDay {
    Domingo,
    Lunes,
    Martes,
    Miercoles,
    Jueves,
    Viernes,
    Sabado,
}

impl DutyDay {
    /// Sunday-first canonical order.
    pub const ALL: [DutyDay; 7] = [
        DutyDay::Domingo,
        DutyDay::Lunes,
        DutyDay::Martes,
        DutyDay::Miercoles,
        DutyDay::Jueves,
        DutyDay::Viernes,
        DutyDay::Sabado,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DutyDay::Domingo => "Domingo",
            DutyDay::Lunes => "Lunes",
            DutyDay::Martes => "Martes",
            DutyDay::Miercoles => "Miércoles",
            DutyDay::Jueves => "Jueves",
            DutyDay::Viernes => "Viernes",
            DutyDay::Sabado => "Sábado",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "Domingo" => Some(DutyDay::Domingo),
            "Lunes" => Some(DutyDay::Lunes),
            "Martes" => Some(DutyDay::Martes),
            "Miércoles" => Some(DutyDay::Miercoles),
            "Jueves" => Some(DutyDay::Jueves),
            "Viernes" => Some(DutyDay::Viernes),
            "Sábado" => Some(DutyDay::Sabado),
            _ => None,
        }
    }
}

/// The single conversion point between the two day-name domains.
impl From<ScheduleDay> for DutyDay {
    fn from(day: ScheduleDay) -> Self {
        match day {
            ScheduleDay::Sunday => DutyDay::Domingo,
            ScheduleDay::Monday => DutyDay::Lunes,
            ScheduleDay::Tuesday => DutyDay::Martes,
            ScheduleDay::Wednesday => DutyDay::Miercoles,
            ScheduleDay::Thursday => DutyDay::Jueves,
            ScheduleDay::Friday => DutyDay::Viernes,
            ScheduleDay::Saturday => DutyDay::Sabado,
        }
    }
}

impl TryFrom<String> for DutyDay {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DutyDay::from_name(&s).ok_or_else(|| format!("unknown day name: {}", s))
    }
}

impl From<DutyDay> for String {
    fn from(d: DutyDay) -> Self {
        d.name().to_string()
    }
}
