// ABOUTME: Per-item nutrient computation from food composition and portion size
// ABOUTME: Scales per-100 g values, derives MBG energy, and sums items into menu totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Nutrition Calculator Module
//!
//! Composition tables list nutrients per 100 g of edible food. A portion of
//! `gram` grams contributes `value * gram / 100` of each nutrient. Energy is
//! derived from the scaled macronutrients with the MBG factors:
//!
//! ```text
//! energy = protein x 4 + carbohydrate x 4 + fat x 9 + fiber x 2
//! ```
//!
//! Animal protein equals the item's protein when the food is classified as
//! animal-derived, and zero otherwise (including unclassified foods).
//!
//! Every result is unrounded and linear in `gram`, so menu totals are the
//! exact sum of item contributions.

use mbg_core::constants::energy::{
    CARBOHYDRATE_KCAL_PER_G, FAT_KCAL_PER_G, FIBER_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use mbg_core::constants::REFERENCE_PORTION_G;
use mbg_core::models::{MenuItem, NutrientTotals};
use mbg_core::tables::{CategoryTable, FoodCompositionTable};
use mbg_core::{EvaluationError, Result};
use rayon::prelude::*;
use tracing::debug;

/// Check that a portion is a positive finite number of grams
///
/// # Errors
///
/// Returns `InvalidPortion` for zero, negative, NaN, or infinite values
pub fn validate_portion(gram: f64) -> Result<f64> {
    if gram.is_finite() && gram > 0.0 {
        Ok(gram)
    } else {
        Err(EvaluationError::invalid_portion(gram))
    }
}

/// Energy (kcal) of the given macronutrient amounts under the MBG factors
#[must_use]
pub fn energy_kcal(protein_g: f64, carbohydrate_g: f64, fat_g: f64, fiber_g: f64) -> f64 {
    protein_g * PROTEIN_KCAL_PER_G
        + carbohydrate_g * CARBOHYDRATE_KCAL_PER_G
        + fat_g * FAT_KCAL_PER_G
        + fiber_g * FIBER_KCAL_PER_G
}

/// Calculate the nutrient contribution of `gram` grams of one food
///
/// # Arguments
/// * `food_id` - Id in the composition table
/// * `gram` - Portion size in grams
/// * `foods` - Composition per 100 g
/// * `categories` - Animal/plant classification
///
/// # Errors
///
/// Returns `InvalidPortion` if `gram` is not a positive finite number, and
/// `FoodNotFound` if `food_id` is not in the composition table
pub fn calculate_item_nutrients(
    food_id: &str,
    gram: f64,
    foods: &FoodCompositionTable,
    categories: &CategoryTable,
) -> Result<NutrientTotals> {
    let gram = validate_portion(gram)?;
    let food = foods
        .get(food_id)
        .ok_or_else(|| EvaluationError::food_not_found(food_id))?;

    let factor = gram / REFERENCE_PORTION_G;

    let protein = food.protein_g * factor;
    let fat = food.fat_g * factor;
    let carbohydrate = food.carbohydrate_g * factor;
    let fiber = food.fiber_g * factor;
    let animal_protein = if categories.is_animal(food_id) {
        protein
    } else {
        0.0
    };

    let totals = NutrientTotals {
        energy: energy_kcal(protein, carbohydrate, fat, fiber),
        protein,
        fat,
        carbohydrate,
        fiber,
        animal_protein,
    };

    debug!(
        food.id = %food.id,
        food.name = %food.name,
        portion.gram = gram,
        nutrients.energy = totals.energy,
        nutrients.animal_protein = totals.animal_protein,
        "Computed item nutrients"
    );

    Ok(totals)
}

/// Sum item contributions into menu totals; an empty slice sums to zero
#[must_use]
pub fn aggregate(items: &[NutrientTotals]) -> NutrientTotals {
    items.iter().sum()
}

/// Calculate the contribution of every menu item, in menu order
///
/// Items are computed on the rayon pool when `parallel` is set. The first
/// failing item in menu order determines the error either way.
///
/// # Errors
///
/// Returns the error of the first item that fails `calculate_item_nutrients`
pub fn calculate_menu_items(
    items: &[MenuItem],
    foods: &FoodCompositionTable,
    categories: &CategoryTable,
    parallel: bool,
) -> Result<Vec<NutrientTotals>> {
    let compute =
        |item: &MenuItem| calculate_item_nutrients(&item.food_id, item.gram, foods, categories);

    if parallel {
        let results: Vec<Result<NutrientTotals>> = items.par_iter().map(compute).collect();
        results.into_iter().collect()
    } else {
        items.iter().map(compute).collect()
    }
}
