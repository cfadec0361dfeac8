//! Daily roster construction
//!
//! Expands assignment intervals into per-day project membership.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::record::{AssignmentRecord, is_header, parse_record};

/// Employees per project on a single day. Membership is idempotent: the same
/// employee added twice to a project/day collapses to one entry.
pub(crate) type ProjectMembership = BTreeMap<i64, BTreeSet<i64>>;

/// Per-day project membership for the whole input, keyed by date so that
/// aggregation walks days in ascending order.
#[derive(Debug, Default)]
pub(crate) struct DailyRoster {
    days: BTreeMap<NaiveDate, ProjectMembership>,
}

impl DailyRoster {
    /// Add every day of the record's interval (inclusive on both ends).
    pub(crate) fn add_record(&mut self, record: &AssignmentRecord) {
        for day in record.start_date.iter_days() {
            if day > record.end_date {
                break;
            }
            self.days
                .entry(day)
                .or_default()
                .entry(record.project_id)
                .or_default()
                .insert(record.employee_id);
        }
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = (&NaiveDate, &ProjectMembership)> {
        self.days.iter()
    }
}

/// Build the roster from raw input lines.
///
/// The first line is skipped when it looks like a header; every other line
/// either parses into a record or is dropped without touching the roster.
pub(crate) fn build_roster<'a, I>(lines: I, today: NaiveDate) -> DailyRoster
where
    I: IntoIterator<Item = &'a str>,
{
    let mut roster = DailyRoster::default();

    for (index, line) in lines.into_iter().enumerate() {
        if index == 0 && is_header(line) {
            continue;
        }
        if let Some(record) = parse_record(line, today) {
            roster.add_record(&record);
        }
    }

    roster
}
