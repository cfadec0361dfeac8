mod json;
mod report;
mod table;

pub(crate) use json::output_pairs_json;
pub(crate) use report::format_report;
pub(crate) use table::print_pair_table;
