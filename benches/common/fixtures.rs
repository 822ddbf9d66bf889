// ABOUTME: Benchmark fixtures generating synthetic food tables and menus
// ABOUTME: Deterministic data so evaluation timings are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Benchmark fixtures for menu evaluation.

use mbg_menu_validator::models::{
    AgeGroupRecord, CategoryRecord, CategoryRequirements, EducationGroupRecord, EducationLevel,
    FoodCompositionRecord, FoodGroup, Gender, MenuItem, StandardRecord,
};
use mbg_menu_validator::tables::{
    AgeGroupTable, CategoryTable, EducationGroupTable, FoodCompositionTable, PortionTable,
    ReferenceTables, StandardTable,
};

/// Number of foods in the generated composition table
pub const FOOD_COUNT: usize = 1_000;

/// Predefined menu sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum MenuSize {
    /// One school lunch tray
    Tray,
    /// A week of trays evaluated as one menu
    Week,
    /// Past the default parallel threshold
    Bulk,
}

impl MenuSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Tray => 5,
            Self::Week => 25,
            Self::Bulk => 2_000,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn food(index: usize) -> FoodCompositionRecord {
    let step = (index % 37) as f64;
    FoodCompositionRecord {
        id: index.to_string(),
        name: format!("Bahan {index}"),
        protein_g: 2.0 + step * 0.5,
        fat_g: 0.5 + step * 0.2,
        carbohydrate_g: 5.0 + step,
        fiber_g: (index % 5) as f64 * 0.7,
    }
}

/// Reference tables with `FOOD_COUNT` foods spread over the four food groups
#[must_use]
pub fn generate_tables() -> ReferenceTables {
    let foods = FoodCompositionTable::from_records((0..FOOD_COUNT).map(food));
    let categories = CategoryTable::from_records((0..FOOD_COUNT).map(|index| CategoryRecord {
        id: index.to_string(),
        is_animal: index % 3 == 0,
        food_group: Some(FoodGroup::ALL[index % FoodGroup::ALL.len()]),
    }));

    ReferenceTables {
        foods,
        categories,
        age_groups: AgeGroupTable::from_records([AgeGroupRecord {
            age_min: 13,
            age_max: 15,
            education_level: EducationLevel::Smp,
            grade: 8,
            default_gender: Gender::Unspecified,
        }]),
        education_groups: EducationGroupTable::from_records([EducationGroupRecord {
            level: EducationLevel::Smp,
            class_min: 7,
            class_max: 9,
            group_id: "SMP_7_9".to_owned(),
        }]),
        standards: StandardTable::from_records([StandardRecord {
            group_id: "SMP_7_9".to_owned(),
            min_energy_kcal: 600.0,
            max_energy_kcal: 900.0,
            min_protein_g: 25.0,
            min_animal_protein_g: 9.0,
            min_carbohydrate_g: 90.0,
            min_fiber_g: 6.0,
            requirements: CategoryRequirements {
                req_protein: true,
                req_carb: true,
                req_veg: true,
                req_fruit: true,
            },
        }]),
        portions: PortionTable::default(),
    }
}

/// Menu of `size` items cycling through the generated foods
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_menu(size: MenuSize) -> Vec<MenuItem> {
    (0..size.count())
        .map(|index| {
            let food_id = (index * 7919) % FOOD_COUNT;
            MenuItem::new(food_id.to_string(), 20.0 + (index % 9) as f64 * 15.0)
        })
        .collect()
}
