#![warn(clippy::pedantic)]

pub mod config;
pub mod delta_type;
pub mod format;
pub mod greedy;
pub mod plan_error;
pub mod planner;
pub mod plate;
pub mod plate_rack;
pub mod progression;
pub mod subset_mask;
pub mod workout_set;

pub use planner::plan;
