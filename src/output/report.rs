//! Default CSV report
//!
//! One row per (winning pair, shared project), pairs ordered by employee ids,
//! projects ascending. No trailing newline after the last row.

use std::fmt::Write;

use crate::consts::{NO_OVERLAP_MESSAGE, REPORT_HEADER};
use crate::core::CoworkStats;

pub(crate) fn format_report(stats: &CoworkStats) -> String {
    if stats.max_days() == 0 {
        return NO_OVERLAP_MESSAGE.to_string();
    }

    let mut out = String::from(REPORT_HEADER);
    for pair in stats.winners() {
        let Some(pair_stats) = stats.pair(pair) else {
            continue;
        };
        for (project_id, days) in &pair_stats.common_projects {
            let _ = write!(out, "\n{},{},{},{}", pair.0, pair.1, project_id, days);
        }
    }

    out
}
