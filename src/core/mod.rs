//! Pure evaluation core: opening-hours and pharmacy-rotation logic.
//! No I/O, no clock reads, no panics — time always arrives as an argument.

pub mod hours;
pub mod pharmacy;
