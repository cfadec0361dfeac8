//! Core pipeline stages: record parsing, roster building, pair aggregation.

mod pairs;
mod record;
mod roster;

pub(crate) use pairs::{CoworkStats, aggregate_pairs};
pub(crate) use record::parse_assignment_date;
pub(crate) use roster::build_roster;
