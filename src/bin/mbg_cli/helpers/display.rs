// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors
// ABOUTME: Output helpers for mbg-cli
// ABOUTME: Writes rendered reports to stdout

use mbg_menu_validator::formatters::FormattedOutput;

/// Print a rendered report on stdout
pub fn print_output(output: &FormattedOutput) {
    println!("{}", output.data);
}
