//! Human-readable table output for the winning pairs.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::consts::NO_OVERLAP_MESSAGE;
use crate::core::CoworkStats;

pub(crate) fn print_pair_table(stats: &CoworkStats, use_color: bool) {
    if stats.max_days() == 0 {
        println!("{NO_OVERLAP_MESSAGE}");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let headers = ["Employee #1", "Employee #2", "Project", "Days Worked"];
    if use_color {
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(headers.iter().map(Cell::new));
    }

    for pair in stats.winners() {
        let Some(pair_stats) = stats.pair(pair) else {
            continue;
        };
        for (project_id, days) in &pair_stats.common_projects {
            table.add_row(vec![
                Cell::new(pair.0),
                Cell::new(pair.1),
                Cell::new(project_id),
                Cell::new(days),
            ]);
        }
    }

    println!("{table}");
    println!("\n  Longest collaboration: {} day(s)", stats.max_days());
}
