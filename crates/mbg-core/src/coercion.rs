// ABOUTME: Tolerant coercion of reference-table cells into numbers and booleans
// ABOUTME: Unparsable or missing values become zero/false instead of failing the load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Data-quality tolerance policy.
//!
//! Food composition sheets routinely contain blanks, dashes, and stray quotes.
//! Those cells are coerced here and nowhere else: a nutrient value that cannot
//! be read as a non-negative finite number counts as `0.0`, and a flag that
//! cannot be read as true counts as `false`.

/// Parse a cell as a non-negative finite number
///
/// Accepts surrounding whitespace and quotes and a decimal comma (`"1,5"`).
/// Returns `None` for anything else, including negative and non-finite values.
#[must_use]
pub fn try_number(raw: &str) -> Option<f64> {
    let cleaned = strip_cell(raw);
    if cleaned.is_empty() {
        return None;
    }

    let parsed = cleaned
        .parse::<f64>()
        .ok()
        .or_else(|| cleaned.replace(',', ".").parse::<f64>().ok())?;

    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// Coerce a cell to a non-negative finite number, defaulting to zero
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    try_number(raw).unwrap_or(0.0)
}

/// Coerce a cell to a boolean flag
///
/// Numbers are true when non-zero; words are true for `true`, `yes`, `y`
/// (and the Indonesian `ya`). Everything else, including blanks, is false.
#[must_use]
pub fn coerce_bool(raw: &str) -> bool {
    let cleaned = strip_cell(raw).to_lowercase();
    if let Ok(number) = cleaned.parse::<f64>() {
        return !number.is_nan() && number != 0.0;
    }
    matches!(cleaned.as_str(), "true" | "yes" | "y" | "ya")
}

/// Trim whitespace and one layer of surrounding quotes
#[must_use]
pub fn strip_cell(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map_or(trimmed, str::trim)
}
