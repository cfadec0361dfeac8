//! Assignment record parsing
//!
//! Turns one raw CSV line into a validated record, or rejects it. Malformed
//! lines are never an error; callers skip them and keep going.

use chrono::NaiveDate;

/// Accepted date layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"];

/// Compact layout, only attempted on 8-character tokens so `%Y` cannot
/// swallow the month and day digits.
const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// One validated assignment line. Lives only for the duration of roster
/// expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AssignmentRecord {
    pub(crate) employee_id: i64,
    pub(crate) project_id: i64,
    pub(crate) start_date: NaiveDate,
    pub(crate) end_date: NaiveDate,
}

/// Parse a date field, tolerant of surrounding whitespace.
pub(crate) fn parse_assignment_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }
    if s.len() == 8
        && let Ok(date) = NaiveDate::parse_from_str(s, COMPACT_DATE_FORMAT)
    {
        return Some(date);
    }
    None
}

/// Parse one data line into a record.
///
/// A line needs at least four comma-separated fields (extras are ignored):
/// employee id, project id, start date, end date. An end date of `NULL`
/// (any case) means the assignment is still running and resolves to `today`.
/// Inverted ranges are rejected, so `start_date <= end_date` always holds
/// on the returned record.
pub(crate) fn parse_record(line: &str, today: NaiveDate) -> Option<AssignmentRecord> {
    let mut fields = line.split(',');

    let employee_id = fields.next()?.trim().parse::<i64>().ok()?;
    let project_id = fields.next()?.trim().parse::<i64>().ok()?;
    let start_date = parse_assignment_date(fields.next()?)?;

    let end_field = fields.next()?;
    let end_date = if end_field.trim().eq_ignore_ascii_case("NULL") {
        today
    } else {
        parse_assignment_date(end_field)?
    };

    if start_date > end_date {
        return None;
    }

    Some(AssignmentRecord {
        employee_id,
        project_id,
        start_date,
        end_date,
    })
}

/// Header heuristic: the first line is skipped when its first non-whitespace
/// character is not a digit. A blank first line counts as a header.
pub(crate) fn is_header(line: &str) -> bool {
    match line.trim_start().chars().next() {
        Some(c) => !c.is_ascii_digit(),
        None => true,
    }
}
