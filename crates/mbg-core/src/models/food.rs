// ABOUTME: Food composition and category records, menu items, and nutrient totals
// ABOUTME: NutrientTotals is the canonical unit summed across menu items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Nutrient composition of one food, per 100 g of edible portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCompositionRecord {
    /// Unique food id
    pub id: String,
    /// Display name
    pub name: String,
    /// Protein (g per 100 g)
    pub protein_g: f64,
    /// Fat (g per 100 g)
    pub fat_g: f64,
    /// Carbohydrate (g per 100 g)
    pub carbohydrate_g: f64,
    /// Dietary fiber (g per 100 g)
    pub fiber_g: f64,
}

/// Menu component a food belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodGroup {
    /// Staple carbohydrate source (makanan pokok)
    Staple,
    /// Protein side dish (lauk pauk)
    Protein,
    /// Vegetables (sayuran)
    Vegetable,
    /// Fruit (buah)
    Fruit,
}

impl FoodGroup {
    /// All groups in menu order
    pub const ALL: [Self; 4] = [Self::Staple, Self::Protein, Self::Vegetable, Self::Fruit];

    /// Parse a food group from an English or Indonesian label
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "staple" | "carb" | "carbohydrate" | "makanan pokok" | "pokok" => Some(Self::Staple),
            "protein" | "side dish" | "lauk" | "lauk pauk" => Some(Self::Protein),
            "vegetable" | "veg" | "sayur" | "sayuran" => Some(Self::Vegetable),
            "fruit" | "buah" | "buah buahan" => Some(Self::Fruit),
            _ => None,
        }
    }
}

/// Classification of a food used for animal protein and category coverage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Food id this classification applies to
    pub id: String,
    /// Whether the food is animal-derived
    pub is_animal: bool,
    /// Menu component, if classified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_group: Option<FoodGroup>,
}

/// One selected food and its portion in a candidate menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Food id in the composition table
    pub food_id: String,
    /// Portion size in grams
    pub gram: f64,
}

impl MenuItem {
    /// Create a menu item
    #[must_use]
    pub fn new(food_id: impl Into<String>, gram: f64) -> Self {
        Self {
            food_id: food_id.into(),
            gram,
        }
    }
}

/// Nutrient amounts for one item or a whole menu
///
/// Values are kept unrounded; rounding belongs to presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Energy (kcal)
    pub energy: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrate (g)
    pub carbohydrate: f64,
    /// Dietary fiber (g)
    pub fiber: f64,
    /// Protein from animal-derived foods (g)
    pub animal_protein: f64,
}

impl NutrientTotals {
    /// All-zero totals
    pub const ZERO: Self = Self {
        energy: 0.0,
        protein: 0.0,
        fat: 0.0,
        carbohydrate: 0.0,
        fiber: 0.0,
        animal_protein: 0.0,
    };
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.energy += rhs.energy;
        self.protein += rhs.protein;
        self.fat += rhs.fat;
        self.carbohydrate += rhs.carbohydrate;
        self.fiber += rhs.fiber;
        self.animal_protein += rhs.animal_protein;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
