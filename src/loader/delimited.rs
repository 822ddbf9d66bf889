// ABOUTME: Reader for delimiter-separated reference sheets with header normalization
// ABOUTME: Handles BOM, quoted cells, delimiter detection, and short or blank rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use super::columns::Column;
use super::LoadError;
use mbg_core::coercion::strip_cell;
use std::mem;

/// Delimiter of the published MBG sheets
pub const DEFAULT_DELIMITER: char = ';';

/// Tried in order when no delimiter is configured
const CANDIDATE_DELIMITERS: [char; 3] = [';', ',', '\t'];

/// One data row with its 1-based source line
#[derive(Debug, Clone)]
pub struct RawRow {
    line: usize,
    cells: Vec<String>,
}

impl RawRow {
    /// Source line number
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Cell at `index`, trimmed and unquoted; missing cells read as empty
    #[must_use]
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map_or("", |cell| strip_cell(cell))
    }
}

/// A parsed sheet: normalized headers plus data rows
#[derive(Debug, Clone)]
pub struct RawTable {
    name: &'static str,
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

impl RawTable {
    /// Parse sheet `content`
    ///
    /// With `delimiter` set to `None` the delimiter is detected from the header.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Empty` if there is no header or no data row
    pub fn parse(
        name: &'static str,
        content: &str,
        delimiter: Option<char>,
    ) -> Result<Self, LoadError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header_line) = lines.next().ok_or(LoadError::Empty { table: name })?;
        let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(header_line));

        let headers = split_record(header_line, delimiter)
            .iter()
            .map(|cell| normalize_header(cell))
            .collect();

        let rows: Vec<RawRow> = lines
            .map(|(line, text)| RawRow {
                line,
                cells: split_record(text, delimiter),
            })
            .filter(|row| row.cells.iter().any(|cell| !strip_cell(cell).is_empty()))
            .collect();

        if rows.is_empty() {
            return Err(LoadError::Empty { table: name });
        }

        Ok(Self {
            name,
            headers,
            rows,
        })
    }

    /// Table name used in diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Normalized header names
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order
    #[must_use]
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Index of a required column
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingColumn` if neither the name nor an alias is present
    pub fn column(&self, column: &Column) -> Result<usize, LoadError> {
        self.optional_column(column)
            .ok_or(LoadError::MissingColumn {
                table: self.name,
                column: column.name,
            })
    }

    /// Index of an optional column; the canonical name beats an alias
    #[must_use]
    pub fn optional_column(&self, column: &Column) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header == column.name)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|header| column.aliases.contains(&header.as_str()))
            })
    }
}

/// Normalize a header cell: `" Protein (g) "` → `"protein_g"`
///
/// Lower-cases, drops quotes and brackets, turns whitespace and hyphens into
/// single underscores, and trims underscores from both ends.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    for ch in strip_cell(raw).to_lowercase().chars() {
        match ch {
            '(' | ')' | '[' | ']' | '"' | '\'' => {}
            c if c.is_whitespace() || c == '-' || c == '_' => {
                if !normalized.is_empty() && !normalized.ends_with('_') {
                    normalized.push('_');
                }
            }
            c => normalized.push(c),
        }
    }
    while normalized.ends_with('_') {
        normalized.pop();
    }
    normalized
}

/// Pick the candidate delimiter that occurs most often in the header
///
/// Ties go to the earlier candidate; a header without any candidate falls
/// back to `;`.
#[must_use]
pub fn detect_delimiter(header_line: &str) -> char {
    CANDIDATE_DELIMITERS
        .iter()
        .rev()
        .copied()
        .filter(|&candidate| header_line.contains(candidate))
        .max_by_key(|&candidate| header_line.matches(candidate).count())
        .unwrap_or(DEFAULT_DELIMITER)
}

/// Split one record, honouring double-quoted cells with `""` escapes
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            c if c == delimiter && !in_quotes => cells.push(mem::take(&mut current)),
            c => current.push(c),
        }
    }
    cells.push(current);
    cells
}
