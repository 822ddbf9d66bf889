// ABOUTME: Output format abstraction for evaluation reports and error payloads
// ABOUTME: Supports a human-readable text report and JSON for machine consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Output Format Abstraction Layer
//!
//! Evaluation results carry unrounded values. Rounding happens here, for
//! display only; the JSON output keeps full precision.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mbg_menu_validator::formatters::{render_evaluation, OutputFormat};
//!
//! let output = render_evaluation(&evaluation, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use mbg_core::errors::ErrorResponse;
use mbg_core::models::{ComplianceResult, NutrientTotals, StandardRecord};
use mbg_core::EvaluationError;
use mbg_intelligence::group_resolver::ResolvedGroup;
use mbg_intelligence::MenuEvaluation;
use serde::Serialize;
use std::error::Error;
use std::fmt::{self, Write as _};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text report (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_json<T: Serialize>(data: &T) -> Result<FormattedOutput, FormatError> {
    let data = serde_json::to_string_pretty(data).map_err(|e| FormatError {
        message: e.to_string(),
        format: OutputFormat::Json,
    })?;

    Ok(FormattedOutput {
        data,
        format: OutputFormat::Json,
    })
}

/// Render a menu evaluation
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization or text rendering fails
pub fn render_evaluation(
    evaluation: &MenuEvaluation,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    match format {
        OutputFormat::Json => format_json(evaluation),
        OutputFormat::Text => text(format, |out| write_evaluation(out, evaluation)),
    }
}

/// Render a group resolution with the group's standard
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization or text rendering fails
pub fn render_resolution(
    group: &ResolvedGroup,
    standard: &StandardRecord,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    #[derive(Serialize)]
    struct Resolution<'a> {
        #[serde(flatten)]
        group: &'a ResolvedGroup,
        standard: &'a StandardRecord,
    }

    match format {
        OutputFormat::Json => format_json(&Resolution { group, standard }),
        OutputFormat::Text => text(format, |out| {
            write_group(out, group)?;
            write_standard(out, standard)
        }),
    }
}

/// Render an evaluation error as `code: message` or an `ErrorResponse` document
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn render_error(
    error: &EvaluationError,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let response = ErrorResponse::from(error);
    match format {
        OutputFormat::Json => format_json(&response),
        OutputFormat::Text => text(format, |out| {
            write!(out, "{}: {}", error_code_name(&response)?, response.message)
        }),
    }
}

fn error_code_name(response: &ErrorResponse) -> Result<String, fmt::Error> {
    serde_json::to_value(response.code)
        .ok()
        .and_then(|value| value.as_str().map(str::to_owned))
        .ok_or(fmt::Error)
}

fn text(
    format: OutputFormat,
    render: impl FnOnce(&mut String) -> fmt::Result,
) -> Result<FormattedOutput, FormatError> {
    let mut data = String::new();
    render(&mut data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })?;
    Ok(FormattedOutput { data, format })
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "SHORT"
    }
}

fn write_group(out: &mut String, group: &ResolvedGroup) -> fmt::Result {
    writeln!(
        out,
        "Group      {} ({} grade {}, {})",
        group.group_id, group.level, group.grade, group.gender
    )
}

fn write_standard(out: &mut String, standard: &StandardRecord) -> fmt::Result {
    writeln!(
        out,
        "Energy     {:.0}-{:.0} kcal",
        standard.min_energy_kcal, standard.max_energy_kcal
    )?;
    writeln!(
        out,
        "Minimums   protein {:.1} g, animal protein {:.1} g, carbohydrate {:.1} g, fiber {:.1} g",
        standard.min_protein_g,
        standard.min_animal_protein_g,
        standard.min_carbohydrate_g,
        standard.min_fiber_g
    )
}

fn write_nutrient_line(
    out: &mut String,
    label: &str,
    value: f64,
    minimum: f64,
    ok: bool,
) -> fmt::Result {
    writeln!(
        out,
        "  {label:<16}{value:>8.1} g   (min {minimum:.1})  {}",
        verdict(ok)
    )
}

fn write_totals(
    out: &mut String,
    totals: &NutrientTotals,
    standard: &StandardRecord,
    compliance: &ComplianceResult,
) -> fmt::Result {
    writeln!(
        out,
        "  {:<16}{:>8.1} kcal ({:.0}-{:.0})  {}",
        "energy",
        totals.energy,
        standard.min_energy_kcal,
        standard.max_energy_kcal,
        compliance.energy_status
    )?;
    write_nutrient_line(
        out,
        "protein",
        totals.protein,
        standard.min_protein_g,
        compliance.protein_ok,
    )?;
    write_nutrient_line(
        out,
        "animal protein",
        totals.animal_protein,
        standard.min_animal_protein_g,
        compliance.animal_protein_ok,
    )?;
    write_nutrient_line(
        out,
        "carbohydrate",
        totals.carbohydrate,
        standard.min_carbohydrate_g,
        compliance.carbohydrate_ok,
    )?;
    write_nutrient_line(
        out,
        "fiber",
        totals.fiber,
        standard.min_fiber_g,
        compliance.fiber_ok,
    )?;
    writeln!(out, "  {:<16}{:>8.1} g", "fat", totals.fat)
}

fn write_evaluation(out: &mut String, evaluation: &MenuEvaluation) -> fmt::Result {
    let compliance = &evaluation.compliance;

    write_group(out, &evaluation.group)?;
    writeln!(out, "Mode       {}", compliance.mode)?;
    writeln!(out, "Nutrients")?;
    write_totals(out, &evaluation.totals, &evaluation.standard, compliance)?;

    let requirements = &evaluation.standard.requirements;
    if requirements.any_active() {
        let checks = &compliance.categories;
        writeln!(out, "Categories")?;
        for (label, required, ok) in [
            ("staple", requirements.req_carb, checks.carb_ok),
            ("protein dish", requirements.req_protein, checks.protein_ok),
            ("vegetable", requirements.req_veg, checks.veg_ok),
            ("fruit", requirements.req_fruit, checks.fruit_ok),
        ] {
            if required {
                writeln!(
                    out,
                    "  {label:<16}{}",
                    if ok { "present" } else { "MISSING" }
                )?;
            }
        }
    }

    write!(
        out,
        "Result     {}",
        if compliance.passed { "PASS" } else { "FAIL" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("table"), OutputFormat::Text);
    }

    #[test]
    fn test_error_renders_code_and_message() {
        let error = EvaluationError::food_not_found("404");

        let text = render_error(&error, OutputFormat::Text).unwrap();
        assert!(text.data.starts_with("FOOD_NOT_FOUND: "));
        assert!(text.data.contains("404"));

        let json = render_error(&error, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json.data).unwrap();
        assert_eq!(value["code"], "FOOD_NOT_FOUND");
    }
}
