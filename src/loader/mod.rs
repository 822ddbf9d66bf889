// ABOUTME: Loads the MBG reference tables from a directory of delimiter-separated files
// ABOUTME: Produces an immutable ReferenceTables snapshot or a typed LoadError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Reference Table Loader
//!
//! The MBG datasets are published as `;`-separated sheets:
//!
//! | File                  | Table                          | Required |
//! |-----------------------|--------------------------------|----------|
//! | `clean_data.csv`      | food composition per 100 g     | yes      |
//! | `food_category.csv`   | animal/plant flag, food group  | yes      |
//! | `age_group.csv`       | age bands                      | yes      |
//! | `education_group.csv` | grade bands to group ids       | yes      |
//! | `standar_mbg.csv`     | MBG standards                  | yes      |
//! | `takaran.csv`         | household measures             | no       |
//!
//! Headers are normalized (`"Protein (g)"` reads as `protein_g`) and common
//! Indonesian names are accepted as aliases. Nutrient cells that cannot be
//! read become `0` with one warning per sheet; structural cells (ages,
//! grades, levels) that cannot be read fail the load.

mod columns;
mod delimited;
mod records;

pub use delimited::{detect_delimiter, normalize_header, DEFAULT_DELIMITER};

use delimited::RawTable;
use mbg_core::tables::{PortionTable, ReferenceTables};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Food composition sheet
pub const FOOD_COMPOSITION_FILE: &str = "clean_data.csv";
/// Food category sheet
pub const FOOD_CATEGORY_FILE: &str = "food_category.csv";
/// Age band sheet
pub const AGE_GROUP_FILE: &str = "age_group.csv";
/// Education group sheet
pub const EDUCATION_GROUP_FILE: &str = "education_group.csv";
/// MBG standard sheet
pub const STANDARD_FILE: &str = "standar_mbg.csv";
/// Household measure sheet (optional)
pub const PORTION_FILE: &str = "takaran.csv";

/// Errors raised while loading reference tables
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// File has no header or no data rows
    #[error("{table}: no data rows")]
    Empty {
        /// Sheet name
        table: &'static str,
    },

    /// Required column absent
    #[error("{table}: missing required column '{column}'")]
    MissingColumn {
        /// Sheet name
        table: &'static str,
        /// Canonical column name
        column: &'static str,
    },

    /// Structural cell cannot be read
    #[error("{table} line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        /// Sheet name
        table: &'static str,
        /// 1-based line in the file
        line: usize,
        /// Canonical column name
        column: &'static str,
        /// Raw cell content
        value: String,
    },
}

/// Loads reference tables from a data directory
#[derive(Debug, Clone)]
pub struct TableLoader {
    data_dir: PathBuf,
    delimiter: Option<char>,
}

impl TableLoader {
    /// Loader for `data_dir` with delimiter detection
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            delimiter: None,
        }
    }

    /// Use a fixed delimiter instead of detecting one per file
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Directory the sheets are read from
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load every reference table
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a required file is missing, unreadable, empty,
    /// lacks a required column, or has a malformed structural cell
    pub fn load(&self) -> Result<ReferenceTables, LoadError> {
        let foods = records::food_composition(&self.read(FOOD_COMPOSITION_FILE)?)?;
        let categories = records::categories(&self.read(FOOD_CATEGORY_FILE)?)?;
        let age_groups = records::age_groups(&self.read(AGE_GROUP_FILE)?)?;
        let education_groups = records::education_groups(&self.read(EDUCATION_GROUP_FILE)?)?;
        let standards = records::standards(&self.read(STANDARD_FILE)?)?;
        let portions = match self.read_optional(PORTION_FILE)? {
            Some(table) => records::portions(&table)?,
            None => PortionTable::default(),
        };

        info!(
            data_dir = %self.data_dir.display(),
            foods = foods.len(),
            categories = categories.len(),
            age_groups = age_groups.rows().len(),
            education_groups = education_groups.rows().len(),
            standards = standards.len(),
            portions = portions.rows().len(),
            "Reference tables loaded"
        );

        Ok(ReferenceTables {
            foods,
            categories,
            age_groups,
            education_groups,
            standards,
            portions,
        })
    }

    fn read(&self, file: &'static str) -> Result<RawTable, LoadError> {
        let path = self.data_dir.join(file);
        let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Read reference sheet");
        RawTable::parse(file, &content, self.delimiter)
    }

    /// Optional sheet: a missing or empty file yields `None`
    fn read_optional(&self, file: &'static str) -> Result<Option<RawTable>, LoadError> {
        if !self.data_dir.join(file).exists() {
            debug!(file, "Optional reference sheet absent");
            return Ok(None);
        }
        match self.read(file) {
            Ok(table) => Ok(Some(table)),
            Err(LoadError::Empty { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Load reference tables from `data_dir` with delimiter detection
///
/// # Errors
///
/// See [`TableLoader::load`]
pub fn load_reference_tables(data_dir: impl AsRef<Path>) -> Result<ReferenceTables, LoadError> {
    TableLoader::new(data_dir.as_ref()).load()
}
