// ABOUTME: Household portion measures (takaran) for converting servings to grams
// ABOUTME: One row per food name and unit, e.g. nasi putih per centong
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use serde::{Deserialize, Serialize};

/// Weight of one household measure of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionRecord {
    /// Food name as written in the portion sheet
    pub food_name: String,
    /// Household unit (centong, potong, butir, ...)
    pub unit: String,
    /// Grams per unit; not validated until conversion
    pub gram: f64,
}
