mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse().with_config(&Config::load());

    // Input validation failures print a diagnostic and terminate the run
    // without an error status; no partial report is emitted.
    if let Err(e) = app::run(&cli) {
        println!("{e}");
        std::process::exit(0);
    }
}
