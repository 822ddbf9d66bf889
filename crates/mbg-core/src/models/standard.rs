// ABOUTME: MBG nutrition standard thresholds for a student group
// ABOUTME: Energy range, nutrient minimums, and optional food-category requirements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use super::food::FoodGroup;
use serde::{Deserialize, Serialize};

/// Food categories a compliant menu must include
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRequirements {
    /// A protein side dish is required
    pub req_protein: bool,
    /// A staple carbohydrate source is required
    pub req_carb: bool,
    /// A vegetable is required
    pub req_veg: bool,
    /// A fruit is required
    pub req_fruit: bool,
}

impl CategoryRequirements {
    /// Whether `group` must appear in the menu
    #[must_use]
    pub const fn requires(&self, group: FoodGroup) -> bool {
        match group {
            FoodGroup::Staple => self.req_carb,
            FoodGroup::Protein => self.req_protein,
            FoodGroup::Vegetable => self.req_veg,
            FoodGroup::Fruit => self.req_fruit,
        }
    }

    /// Whether any requirement is active
    #[must_use]
    pub const fn any_active(&self) -> bool {
        self.req_protein || self.req_carb || self.req_veg || self.req_fruit
    }
}

/// Required nutrient thresholds for one student group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRecord {
    /// Group id this standard applies to
    pub group_id: String,
    /// Minimum energy per meal (kcal)
    pub min_energy_kcal: f64,
    /// Maximum energy per meal (kcal)
    pub max_energy_kcal: f64,
    /// Minimum protein (g)
    pub min_protein_g: f64,
    /// Minimum animal protein (g)
    pub min_animal_protein_g: f64,
    /// Minimum carbohydrate (g)
    pub min_carbohydrate_g: f64,
    /// Minimum fiber (g)
    pub min_fiber_g: f64,
    /// Category requirements; all inactive when the table has no such columns
    #[serde(default, flatten)]
    pub requirements: CategoryRequirements,
}
