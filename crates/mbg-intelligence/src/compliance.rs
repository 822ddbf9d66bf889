// ABOUTME: Compares menu nutrient totals and category coverage against an MBG standard
// ABOUTME: Produces per-dimension statuses and a strict or energy-floor overall verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Compliance Evaluator
//!
//! Each dimension is checked independently:
//!
//! - energy is `LOW` below the minimum, `HIGH` above the maximum, `OK` otherwise
//! - protein, animal protein, fiber, and carbohydrate must reach their minimums
//! - each active category requirement needs at least one menu item in that
//!   category; inactive requirements always hold
//!
//! The overall verdict depends on [`ComplianceMode`]. `Strict` requires energy
//! within range and every other check. `EnergyFloor` only requires energy at
//! or above the minimum.

use mbg_core::models::{
    CategoryChecks, CategoryCoverage, ComplianceMode, ComplianceResult, EnergyStatus, FoodGroup,
    NutrientTotals, StandardRecord,
};

/// Classify energy against the standard's range
#[must_use]
pub fn energy_status(energy: f64, standard: &StandardRecord) -> EnergyStatus {
    if energy < standard.min_energy_kcal {
        EnergyStatus::Low
    } else if energy > standard.max_energy_kcal {
        EnergyStatus::High
    } else {
        EnergyStatus::Ok
    }
}

/// Check the standard's category requirements against menu coverage
///
/// Without coverage information the requirements cannot be checked and are
/// reported as satisfied.
#[must_use]
pub fn check_categories(
    standard: &StandardRecord,
    coverage: Option<&CategoryCoverage>,
) -> CategoryChecks {
    let Some(coverage) = coverage else {
        return CategoryChecks::default();
    };

    let holds = |group| !standard.requirements.requires(group) || coverage.covers(group);

    CategoryChecks {
        protein_ok: holds(FoodGroup::Protein),
        carb_ok: holds(FoodGroup::Staple),
        veg_ok: holds(FoodGroup::Vegetable),
        fruit_ok: holds(FoodGroup::Fruit),
    }
}

/// Evaluate menu totals against a standard
///
/// # Arguments
/// * `totals` - Aggregated menu nutrients
/// * `standard` - Thresholds of the student's group
/// * `coverage` - Food categories present in the menu, if known
/// * `mode` - How the overall verdict is derived
#[must_use]
pub fn evaluate_compliance(
    totals: &NutrientTotals,
    standard: &StandardRecord,
    coverage: Option<&CategoryCoverage>,
    mode: ComplianceMode,
) -> ComplianceResult {
    let energy_status = energy_status(totals.energy, standard);
    let categories = check_categories(standard, coverage);

    let mut result = ComplianceResult {
        mode,
        energy_status,
        protein_ok: totals.protein >= standard.min_protein_g,
        animal_protein_ok: totals.animal_protein >= standard.min_animal_protein_g,
        fiber_ok: totals.fiber >= standard.min_fiber_g,
        carbohydrate_ok: totals.carbohydrate >= standard.min_carbohydrate_g,
        categories,
        passed: false,
    };

    result.passed = match mode {
        ComplianceMode::Strict => {
            energy_status == EnergyStatus::Ok && result.nutrients_ok() && categories.all_ok()
        }
        ComplianceMode::EnergyFloor => energy_status != EnergyStatus::Low,
    };

    result
}
