// ABOUTME: Shared constants for nutrient computation and student grade ranges
// ABOUTME: Energy factors per gram of macronutrient and the reference portion size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Constants used by the nutrition calculator and group resolver.

/// Energy factors (kcal per gram) used by the MBG standard
///
/// Fiber counts at 2 kcal/g. This is the MBG convention and deliberately
/// differs from general Atwater tables, which ignore fiber.
pub mod energy {
    /// kcal per gram of protein
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const CARBOHYDRATE_KCAL_PER_G: f64 = 4.0;
    /// kcal per gram of fat
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// kcal per gram of dietary fiber
    pub const FIBER_KCAL_PER_G: f64 = 2.0;
}

/// Composition values are expressed per this many grams of edible food
pub const REFERENCE_PORTION_G: f64 = 100.0;

/// Grade bounds of the Indonesian school system
pub mod grades {
    /// Lowest grade number
    pub const MIN_GRADE: u8 = 1;
    /// Highest grade number
    pub const MAX_GRADE: u8 = 12;
    /// Last grade of primary school (SD)
    pub const PRIMARY_LAST: u8 = 6;
    /// Last grade of junior secondary school (SMP)
    pub const JUNIOR_SECONDARY_LAST: u8 = 9;
}
