// ABOUTME: Converts household measures (takaran) into grams
// ABOUTME: Matches food name and unit case-insensitively against the portion table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use crate::nutrition_calculator::validate_portion;
use mbg_core::models::MenuItem;
use mbg_core::tables::{FoodCompositionTable, PortionTable};
use mbg_core::{EvaluationError, Result};

/// Lower-case and collapse whitespace so "Nasi  Putih " matches "nasi putih"
fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Grams in one `unit` of `food_name`
///
/// # Errors
///
/// Returns `PortionNotFound` if the table is empty or has no matching row,
/// and `InvalidPortion` if the matching row's gram value is not positive
pub fn portion_to_gram(food_name: &str, unit: &str, portions: &PortionTable) -> Result<f64> {
    let food_name = normalize(food_name);
    let unit = normalize(unit);

    let row = portions
        .rows()
        .iter()
        .find(|row| normalize(&row.food_name) == food_name && normalize(&row.unit) == unit)
        .ok_or(EvaluationError::PortionNotFound { food_name, unit })?;

    validate_portion(row.gram)
}

/// Menu item for one household measure of a named food
///
/// # Errors
///
/// Returns `PortionNotFound` or `InvalidPortion` from the conversion, and
/// `FoodNotFound` if no food in the composition table has that name
pub fn serving_to_menu_item(
    food_name: &str,
    unit: &str,
    portions: &PortionTable,
    foods: &FoodCompositionTable,
) -> Result<MenuItem> {
    let gram = portion_to_gram(food_name, unit, portions)?;
    let food = foods
        .find_by_name(food_name)
        .ok_or_else(|| EvaluationError::food_not_found(food_name.trim()))?;

    Ok(MenuItem::new(food.id.clone(), gram))
}
