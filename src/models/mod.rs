pub mod business;
pub mod category;
pub mod schedule;
pub mod weekday;
