mod cli;
mod config;
mod error;
mod handlers;
mod outputter;
mod package;
mod summary;
#[cfg(test)]
mod test_support;
mod url_generator;
mod utils;
mod webhook;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("CHANGELOGS_VERBOSE", "1");
        }
    }

    let result = workflow::execute_summary(&cli.path, &cli.operations, cli.composer_home());

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
