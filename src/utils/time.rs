//! Time utilities: resolving "now", parsing pinned timestamps, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDateTime};

/// Wall-clock "now" as a naive local timestamp. Only the CLI edge calls
/// this; the core always receives time as an argument.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse the `--now` override (YYYY-MM-DD HH:MM).
pub fn parse_now(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").ok()
}

/// The instant every command evaluates against: the pinned override when
/// present, the wall clock otherwise.
pub fn resolve_now(pinned: Option<&str>) -> AppResult<NaiveDateTime> {
    match pinned {
        Some(s) => parse_now(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string())),
        None => Ok(now_local()),
    }
}

/// "2026-08-03 14:05" style stamp for watch ticks and headers.
pub fn format_stamp(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%d %H:%M").to_string()
}
