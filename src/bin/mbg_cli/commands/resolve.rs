// ABOUTME: `resolve` command - shows the group id and standard a student maps to
// ABOUTME: Useful for checking age bands and class labels against the reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use super::{output_format, report_error, DataArgs, Outcome, StudentArgs};
use crate::helpers::display::print_output;
use anyhow::Result;
use clap::Args;
use mbg_menu_validator::formatters::render_resolution;
use mbg_menu_validator::intelligence::group_resolver::resolve_group;
use mbg_menu_validator::intelligence::standards::get_standard;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub student: StudentArgs,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the `resolve` command
pub fn run(args: &ResolveArgs) -> Result<Outcome> {
    let format = output_format(args.json);
    let tables = args.data.load()?;

    let resolution = resolve_group(
        &args.student.profile(),
        &tables.age_groups,
        &tables.education_groups,
    )
    .and_then(|group| {
        get_standard(&group.group_id, &tables.standards).map(|standard| (group, standard))
    });

    match resolution {
        Ok((group, standard)) => {
            print_output(&render_resolution(&group, standard, format)?);
            Ok(Outcome::Pass)
        }
        Err(e) => report_error(&e, format),
    }
}
