//! Pipeline orchestration
//!
//! Resolves and validates the input path, reads the assignment lines, runs
//! the core stages, and prints the report in the selected format.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, OutputFormat};
use crate::core::{aggregate_pairs, build_roster, parse_assignment_date};
use crate::error::AppError;
use crate::output::{format_report, output_pairs_json, print_pair_table};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let path = resolve_path(cli)?;
    let today = resolve_today(cli)?;

    let content = fs::read_to_string(&path).map_err(|source| AppError::Read {
        path: path.clone(),
        source,
    })?;

    let roster = build_roster(content.lines(), today);
    let stats = aggregate_pairs(&roster);

    match cli.format {
        OutputFormat::Csv => println!("{}", format_report(&stats)),
        OutputFormat::Table => print_pair_table(&stats, cli.use_color()),
        OutputFormat::Json => println!("{}", output_pairs_json(&stats)),
    }

    Ok(())
}

/// Open-ended (NULL) assignments run through "today", overridable for
/// reproducible runs.
fn resolve_today(cli: &Cli) -> Result<NaiveDate, AppError> {
    match &cli.as_of {
        Some(input) => parse_assignment_date(input).ok_or_else(|| AppError::InvalidDate {
            input: input.clone(),
        }),
        None => Ok(Local::now().date_naive()),
    }
}

fn resolve_path(cli: &Cli) -> Result<PathBuf, AppError> {
    let path = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_for_path(),
    };
    check_path(&path)?;
    Ok(path)
}

fn prompt_for_path() -> PathBuf {
    print!("Path to file: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    PathBuf::from(line.trim())
}

/// The file must exist and carry a .csv/.txt extension, or none at all.
fn check_path(path: &Path) -> Result<(), AppError> {
    if !path.is_file() {
        return Err(AppError::Missing {
            path: path.to_path_buf(),
        });
    }
    if !extension_allowed(path) {
        return Err(AppError::Extension {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn extension_allowed(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        None => true,
        Some(ext) => ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt"),
    }
}
