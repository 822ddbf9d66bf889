// ABOUTME: Compliance verdict types produced by the MBG evaluator
// ABOUTME: Energy tri-state, per-nutrient checks, category coverage, and evaluation modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use super::food::FoodGroup;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Energy position relative to the standard's range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnergyStatus {
    /// Below the minimum
    Low,
    /// Within `[min, max]`
    Ok,
    /// Above the maximum
    High,
}

impl fmt::Display for EnergyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "LOW",
            Self::Ok => "OK",
            Self::High => "HIGH",
        })
    }
}

/// How strictly the overall verdict is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceMode {
    /// Energy within range, every nutrient minimum and every active category requirement met
    #[default]
    Strict,
    /// Only "energy at least the minimum" gates the verdict
    EnergyFloor,
}

impl ComplianceMode {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::EnergyFloor => "energy_floor",
        }
    }
}

impl fmt::Display for ComplianceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "strict" => Ok(Self::Strict),
            "energy_floor" | "lenient" => Ok(Self::EnergyFloor),
            other => Err(format!("unknown compliance mode: {other}")),
        }
    }
}

/// Which food categories a menu contains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    /// A staple carbohydrate source is present
    pub staple: bool,
    /// A protein side dish is present
    pub protein: bool,
    /// A vegetable is present
    pub vegetable: bool,
    /// A fruit is present
    pub fruit: bool,
}

impl CategoryCoverage {
    /// Coverage from the food groups of the selected items
    #[must_use]
    pub fn from_groups<I: IntoIterator<Item = FoodGroup>>(groups: I) -> Self {
        groups.into_iter().fold(Self::default(), |mut coverage, group| {
            coverage.mark(group);
            coverage
        })
    }

    /// Record that `group` is present
    pub fn mark(&mut self, group: FoodGroup) {
        match group {
            FoodGroup::Staple => self.staple = true,
            FoodGroup::Protein => self.protein = true,
            FoodGroup::Vegetable => self.vegetable = true,
            FoodGroup::Fruit => self.fruit = true,
        }
    }

    /// Whether `group` is present
    #[must_use]
    pub const fn covers(&self, group: FoodGroup) -> bool {
        match group {
            FoodGroup::Staple => self.staple,
            FoodGroup::Protein => self.protein,
            FoodGroup::Vegetable => self.vegetable,
            FoodGroup::Fruit => self.fruit,
        }
    }
}

/// Per-category requirement outcomes; inactive requirements are `true`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChecks {
    /// Protein side dish requirement
    pub protein_ok: bool,
    /// Staple carbohydrate requirement
    pub carb_ok: bool,
    /// Vegetable requirement
    pub veg_ok: bool,
    /// Fruit requirement
    pub fruit_ok: bool,
}

impl CategoryChecks {
    /// Whether every category requirement holds
    #[must_use]
    pub const fn all_ok(&self) -> bool {
        self.protein_ok && self.carb_ok && self.veg_ok && self.fruit_ok
    }
}

impl Default for CategoryChecks {
    fn default() -> Self {
        Self {
            protein_ok: true,
            carb_ok: true,
            veg_ok: true,
            fruit_ok: true,
        }
    }
}

/// Outcome of checking a menu against an MBG standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Mode the overall verdict was derived with
    pub mode: ComplianceMode,
    /// Energy position relative to the range
    pub energy_status: EnergyStatus,
    /// Protein meets the minimum
    pub protein_ok: bool,
    /// Animal protein meets the minimum
    pub animal_protein_ok: bool,
    /// Fiber meets the minimum
    pub fiber_ok: bool,
    /// Carbohydrate meets the minimum
    pub carbohydrate_ok: bool,
    /// Category requirement outcomes
    pub categories: CategoryChecks,
    /// Overall verdict
    pub passed: bool,
}

impl ComplianceResult {
    /// Whether every nutrient minimum holds
    #[must_use]
    pub const fn nutrients_ok(&self) -> bool {
        self.protein_ok && self.animal_protein_ok && self.fiber_ok && self.carbohydrate_ok
    }
}
