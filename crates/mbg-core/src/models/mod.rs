// ABOUTME: Typed reference records and evaluation value types
// ABOUTME: Re-exports food, student, standard, portion, and compliance models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

/// Food composition, categories, menu items, and nutrient totals
pub mod food;

/// Student placement, education levels, and group reference rows
pub mod student;

/// MBG standard thresholds and category requirements
pub mod standard;

/// Compliance verdict types
pub mod compliance;

/// Household portion measures
pub mod portion;

pub use compliance::{
    CategoryChecks, CategoryCoverage, ComplianceMode, ComplianceResult, EnergyStatus,
};
pub use food::{CategoryRecord, FoodCompositionRecord, FoodGroup, MenuItem, NutrientTotals};
pub use portion::PortionRecord;
pub use standard::{CategoryRequirements, StandardRecord};
pub use student::{
    AgeGroupRecord, EducationGroupRecord, EducationLevel, Gender, StudentPlacement,
    StudentProfile,
};
