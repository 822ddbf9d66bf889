// ABOUTME: Command modules and shared arguments for mbg-cli
// ABOUTME: Student placement flags, config overrides, and the exit-code outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

pub mod evaluate;
pub mod resolve;

use anyhow::Result;
use clap::Args;
use mbg_menu_validator::formatters::{render_error, OutputFormat};
use mbg_menu_validator::loader::TableLoader;
use mbg_menu_validator::models::{Gender, StudentProfile};
use mbg_menu_validator::tables::ReferenceTables;
use mbg_menu_validator::EvaluationError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Menu passes (or the command succeeded)
    Pass,
    /// Menu evaluated and failed
    Fail,
    /// Evaluation could not be completed
    Error,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Pass => ExitCode::SUCCESS,
            Self::Fail => ExitCode::from(1),
            Self::Error => ExitCode::from(2),
        }
    }
}

/// Where the reference sheets live
#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory containing the reference sheets
    #[arg(long, env = "MBG_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Fixed field delimiter (detected per file when omitted)
    #[arg(long)]
    pub delimiter: Option<char>,
}

impl DataArgs {
    pub fn load(&self) -> Result<ReferenceTables> {
        let mut loader = TableLoader::new(&self.data_dir);
        if let Some(delimiter) = self.delimiter {
            loader = loader.with_delimiter(delimiter);
        }
        let tables = loader.load()?;
        info!(data_dir = %self.data_dir.display(), "Reference tables ready");
        Ok(tables)
    }
}

/// Age or class label, exactly one required
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PlacementArgs {
    /// Student age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Class label such as "SD Kelas III"
    #[arg(long = "class")]
    pub class_label: Option<String>,
}

/// Student identification flags
#[derive(Args, Debug)]
pub struct StudentArgs {
    #[command(flatten)]
    pub placement: PlacementArgs,

    /// Gender: l/laki/male or p/perempuan/female (default: all)
    #[arg(long, default_value = "all")]
    pub gender: String,
}

impl StudentArgs {
    pub fn profile(&self) -> StudentProfile {
        let gender = Gender::from_str_lossy(&self.gender);
        match (&self.placement.age, &self.placement.class_label) {
            (Some(age), _) => StudentProfile::by_age(*age, gender),
            (None, Some(label)) => StudentProfile::by_class(label.clone(), gender),
            // clap's group guarantees one of the two
            (None, None) => StudentProfile::by_class(String::new(), gender),
        }
    }
}

/// Print an evaluation error in the requested format and report `Outcome::Error`
pub fn report_error(error: &EvaluationError, format: OutputFormat) -> Result<Outcome> {
    let output = render_error(error, format)?;
    match format {
        OutputFormat::Json => println!("{}", output.data),
        OutputFormat::Text => eprintln!("{}", output.data),
    }
    Ok(Outcome::Error)
}

pub const fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}
