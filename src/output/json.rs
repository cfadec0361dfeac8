//! JSON output: array of winning pairs with their per-project day counts.

use crate::core::CoworkStats;

pub(crate) fn output_pairs_json(stats: &CoworkStats) -> String {
    let mut output: Vec<serde_json::Value> = Vec::new();

    for pair in stats.winners() {
        let Some(pair_stats) = stats.pair(pair) else {
            continue;
        };
        let projects: Vec<serde_json::Value> = pair_stats
            .common_projects
            .iter()
            .map(|(project_id, days)| {
                serde_json::json!({
                    "project_id": project_id,
                    "days_worked": days,
                })
            })
            .collect();
        output.push(serde_json::json!({
            "employee_1": pair.0,
            "employee_2": pair.1,
            "total_days_together": pair_stats.total_days,
            "projects": projects,
        }));
    }

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
