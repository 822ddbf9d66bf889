// ABOUTME: mbg-cli - command-line front end for MBG menu evaluation
// ABOUTME: Loads reference tables, evaluates menus, and resolves student groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors
//!
//! Usage:
//! ```bash
//! # Evaluate a menu for a 9 year old
//! mbg-cli evaluate --data-dir data --age 9 --item 11:150 --item 42:60
//!
//! # Evaluate by class label with household measures, JSON output
//! mbg-cli evaluate --data-dir data --class "SD Kelas III" --gender p \
//!     --serving "nasi putih:centong" --food "Telur Rebus:55" --json
//!
//! # Only check the energy floor
//! mbg-cli evaluate --data-dir data --age 9 --item 11:300 --mode energy-floor
//!
//! # Show the group and standard a student resolves to
//! mbg-cli resolve --data-dir data --class "SMP Kelas II" --gender l
//! ```
//!
//! Exit codes: `0` the menu passes, `1` the menu fails, `2` the evaluation
//! could not be completed (bad input, unknown food, missing group, ...).

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use commands::Outcome;
use mbg_menu_validator::logging::LoggingConfig;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mbg-cli",
    about = "MBG school meal validator",
    long_about = "Computes the nutrient content of a school meal menu and checks it against the MBG standard of the student's group."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate a menu against the student's MBG standard
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Show the group and standard a student resolves to
    Resolve(commands::resolve::ResolveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("warning: logging not initialized: {e}");
    }
    debug!("mbg-cli starting");

    let outcome = match cli.command {
        Command::Evaluate(args) => commands::evaluate::run(&args),
        Command::Resolve(args) => commands::resolve::run(&args),
    };

    match outcome {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {e:#}");
            Outcome::Error.exit_code()
        }
    }
}
