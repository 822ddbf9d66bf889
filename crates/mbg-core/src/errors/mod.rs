// ABOUTME: Unified error taxonomy for menu evaluation failures
// ABOUTME: Maps every lookup and validation failure to a typed variant and a stable error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! # Evaluation Errors
//!
//! Every failure aborts the evaluation and surfaces one of the variants below.
//! None of them are transient, so callers should not retry: the same inputs
//! against the same reference tables always fail the same way.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Stable error codes, grouped in numeric bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Portion is zero, negative, or not a finite number
    InvalidPortion = 3000,
    /// Evaluation requested with no menu items
    EmptyMenu = 3001,
    /// Class label has no recognizable grade token
    UnparsableClass = 3002,
    /// Age is not covered by any age-group row
    AgeOutOfRange = 3003,

    // Lookup (4000-4999)
    /// Food id absent from the composition table
    FoodNotFound = 4000,
    /// No education-group row matches level, grade, and gender
    GroupNotFound = 4001,
    /// No standard row matches the resolved group id
    StandardNotFound = 4002,
    /// No household portion matches the food name and unit
    PortionNotFound = 4003,
}

impl ErrorCode {
    /// Numeric value of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidPortion => "Portion must be a positive number of grams",
            Self::EmptyMenu => "The menu has no items to evaluate",
            Self::UnparsableClass => "The class label does not contain a known grade",
            Self::AgeOutOfRange => "No age group covers the given age",
            Self::FoodNotFound => "The food is not in the composition table",
            Self::GroupNotFound => "No student group matches the level, grade, and gender",
            Self::StandardNotFound => "No nutrition standard exists for the student group",
            Self::PortionNotFound => "No household portion matches the food and unit",
        }
    }

    /// Whether this code reports a missing reference row rather than bad input
    #[must_use]
    pub const fn is_lookup_failure(self) -> bool {
        self.as_u16() >= 4000
    }
}

/// Errors raised while computing or evaluating a menu
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    /// Portion size is not a positive finite number of grams
    #[error("invalid portion: {gram} g (must be > 0)")]
    InvalidPortion {
        /// The rejected gram value
        gram: f64,
    },

    /// Food id is not in the composition table
    #[error("food not found: {food_id}")]
    FoodNotFound {
        /// The id that was looked up
        food_id: String,
    },

    /// No age-group row contains the given age
    #[error("age {age} is not covered by any age group")]
    AgeOutOfRange {
        /// Student age in years
        age: u32,
    },

    /// Class label contains no grade numeral
    #[error("cannot parse a grade from class label {label:?}")]
    UnparsableClass {
        /// The rejected label
        label: String,
    },

    /// No education-group row matches
    #[error("no group for level {level} grade {grade} (gender: {gender})")]
    GroupNotFound {
        /// Education level that was searched
        level: String,
        /// Absolute grade (1-12)
        grade: u8,
        /// Gender filter that was applied
        gender: String,
    },

    /// No standard row for the group id
    #[error("no MBG standard for group {group_id}")]
    StandardNotFound {
        /// Group id that was looked up
        group_id: String,
    },

    /// Evaluation requested with zero items while empty menus are rejected
    #[error("menu has no items")]
    EmptyMenu,

    /// Household measure not present in the portion table
    #[error("no portion for {food_name:?} in unit {unit:?}")]
    PortionNotFound {
        /// Normalized food name
        food_name: String,
        /// Normalized unit
        unit: String,
    },
}

impl EvaluationError {
    /// Create an "invalid portion" error
    #[must_use]
    pub const fn invalid_portion(gram: f64) -> Self {
        Self::InvalidPortion { gram }
    }

    /// Create a "food not found" error
    #[must_use]
    pub fn food_not_found(food_id: impl Into<String>) -> Self {
        Self::FoodNotFound {
            food_id: food_id.into(),
        }
    }

    /// Create a "standard not found" error
    #[must_use]
    pub fn standard_not_found(group_id: impl Into<String>) -> Self {
        Self::StandardNotFound {
            group_id: group_id.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPortion { .. } => ErrorCode::InvalidPortion,
            Self::FoodNotFound { .. } => ErrorCode::FoodNotFound,
            Self::AgeOutOfRange { .. } => ErrorCode::AgeOutOfRange,
            Self::UnparsableClass { .. } => ErrorCode::UnparsableClass,
            Self::GroupNotFound { .. } => ErrorCode::GroupNotFound,
            Self::StandardNotFound { .. } => ErrorCode::StandardNotFound,
            Self::EmptyMenu => ErrorCode::EmptyMenu,
            Self::PortionNotFound { .. } => ErrorCode::PortionNotFound,
        }
    }

    /// Structured details for machine-readable error reports
    #[must_use]
    pub fn details(&self) -> Value {
        match self {
            Self::InvalidPortion { gram } => json!({ "gram": gram }),
            Self::FoodNotFound { food_id } => json!({ "food_id": food_id }),
            Self::AgeOutOfRange { age } => json!({ "age": age }),
            Self::UnparsableClass { label } => json!({ "label": label }),
            Self::GroupNotFound {
                level,
                grade,
                gender,
            } => json!({ "level": level, "grade": grade, "gender": gender }),
            Self::StandardNotFound { group_id } => json!({ "group_id": group_id }),
            Self::EmptyMenu => Value::Null,
            Self::PortionNotFound { food_name, unit } => {
                json!({ "food_name": food_name, "unit": unit })
            }
        }
    }
}

/// Error report shape used by callers that serialize failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Offending input, if any
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl From<&EvaluationError> for ErrorResponse {
    fn from(error: &EvaluationError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

/// Result type alias for evaluation operations
pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_banded() {
        assert!(!ErrorCode::InvalidPortion.is_lookup_failure());
        assert!(!ErrorCode::EmptyMenu.is_lookup_failure());
        assert!(ErrorCode::FoodNotFound.is_lookup_failure());
        assert!(ErrorCode::StandardNotFound.is_lookup_failure());
        assert_eq!(ErrorCode::GroupNotFound.as_u16(), 4001);
    }

    #[test]
    fn test_error_maps_to_code() {
        assert_eq!(
            EvaluationError::food_not_found("42").code(),
            ErrorCode::FoodNotFound
        );
        assert_eq!(EvaluationError::EmptyMenu.code(), ErrorCode::EmptyMenu);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = EvaluationError::standard_not_found("SD_1_3");
        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();

        assert!(json.contains("STANDARD_NOT_FOUND"));
        assert!(json.contains("SD_1_3"));
    }

    #[test]
    fn test_empty_menu_omits_details() {
        let json = serde_json::to_string(&ErrorResponse::from(&EvaluationError::EmptyMenu)).unwrap();
        assert!(!json.contains("details"));
    }
}
