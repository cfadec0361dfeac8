//! Pair aggregation and running-maximum tracking
//!
//! Walks the roster day by day, derives every unordered pair of employees
//! sharing a project, and keeps two separate counters per pair: distinct days
//! worked together, and days per shared project. A pair sharing two projects
//! on the same day gains one day but two project increments.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::roster::DailyRoster;

/// Unordered employee pair normalized to (smaller id, larger id), so a pair
/// has exactly one storage slot.
pub(crate) type PairKey = (i64, i64);

pub(crate) fn pair_key(a: i64, b: i64) -> PairKey {
    if a <= b { (a, b) } else { (b, a) }
}

/// Accumulated co-working statistics for one pair.
#[derive(Debug, Default)]
pub(crate) struct PairStats {
    /// Distinct calendar days the pair shared at least one project.
    pub(crate) total_days: i64,
    /// Days co-worked per shared project. These may sum to more than
    /// `total_days` when the pair shares several projects on the same day.
    pub(crate) common_projects: BTreeMap<i64, i64>,
}

/// Running maximum over pair day totals. A strictly larger total replaces
/// the winner set; an equal total joins it.
#[derive(Debug, Default)]
pub(crate) struct MaxTracker {
    max_days: i64,
    winners: BTreeSet<PairKey>,
}

impl MaxTracker {
    pub(crate) fn observe(&mut self, pair: PairKey, total_days: i64) {
        if total_days > self.max_days {
            self.max_days = total_days;
            self.winners.clear();
            self.winners.insert(pair);
        } else if total_days == self.max_days {
            self.winners.insert(pair);
        }
    }
}

/// Final result of pair aggregation.
#[derive(Debug, Default)]
pub(crate) struct CoworkStats {
    pairs: HashMap<PairKey, PairStats>,
    tracker: MaxTracker,
}

impl CoworkStats {
    /// Highest number of distinct shared days any pair reached; 0 when no
    /// pair ever shared a project day.
    pub(crate) fn max_days(&self) -> i64 {
        self.tracker.max_days
    }

    /// Winning pairs in (employee1, employee2) order.
    pub(crate) fn winners(&self) -> impl Iterator<Item = &PairKey> {
        self.tracker.winners.iter()
    }

    pub(crate) fn pair(&self, key: &PairKey) -> Option<&PairStats> {
        self.pairs.get(key)
    }
}

/// Aggregate the roster into per-pair statistics and the winning pair set.
pub(crate) fn aggregate_pairs(roster: &DailyRoster) -> CoworkStats {
    let mut pairs: HashMap<PairKey, PairStats> = HashMap::new();
    let mut tracker = MaxTracker::default();

    for (_date, membership) in roster.days() {
        // Pairs that shared at least one project today. Scratch set, scoped
        // to the day, so multiple shared projects still yield one day.
        let mut active_today: BTreeSet<PairKey> = BTreeSet::new();

        for (project_id, employees) in membership {
            let employees: Vec<i64> = employees.iter().copied().collect();
            for i in 0..employees.len() {
                for j in (i + 1)..employees.len() {
                    let key = pair_key(employees[i], employees[j]);
                    let stats = pairs.entry(key).or_default();
                    *stats.common_projects.entry(*project_id).or_insert(0) += 1;
                    active_today.insert(key);
                }
            }
        }

        for key in active_today {
            let stats = pairs.entry(key).or_default();
            stats.total_days += 1;
            tracker.observe(key, stats.total_days);
        }
    }

    CoworkStats { pairs, tracker }
}
