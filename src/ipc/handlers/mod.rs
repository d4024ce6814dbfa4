pub mod core;
pub mod edits;
pub mod schedule;
pub mod views;
