// ABOUTME: Shared test utilities and fixture reference tables for integration tests
// ABOUTME: Provides in-memory tables, matching delimited sheets, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `mbg_menu_validator`
//!
//! The fixture describes a small but complete MBG dataset:
//!
//! | id | food          | group     | animal |
//! |----|---------------|-----------|--------|
//! | 1  | Nasi Putih    | staple    | no     |
//! | 2  | Telur Rebus   | protein   | yes    |
//! | 3  | Bayam Rebus   | vegetable | no     |
//! | 4  | Pisang Ambon  | fruit     | no     |
//! | 5  | Tempe Goreng  | protein   | no     |
//!
//! Groups: `SD_1_3` (no category rules), `SD_4_6_L` / `SD_4_6_P` (staple,
//! protein and vegetable required), `SMP_7_9` (all four required), and
//! `SMA_10_12`, which deliberately has no standard row.

use mbg_menu_validator::models::{
    AgeGroupRecord, CategoryRecord, CategoryRequirements, EducationGroupRecord, EducationLevel,
    FoodCompositionRecord, FoodGroup, Gender, MenuItem, PortionRecord, StandardRecord,
};
use mbg_menu_validator::tables::{
    AgeGroupTable, CategoryTable, EducationGroupTable, FoodCompositionTable, PortionTable,
    ReferenceTables, StandardTable,
};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Tolerance for unrounded nutrient comparisons
pub const TOLERANCE: f64 = 1e-9;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats agree within `TOLERANCE`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

fn food(
    id: &str,
    name: &str,
    protein: f64,
    fat: f64,
    carbohydrate: f64,
    fiber: f64,
) -> FoodCompositionRecord {
    FoodCompositionRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        protein_g: protein,
        fat_g: fat,
        carbohydrate_g: carbohydrate,
        fiber_g: fiber,
    }
}

fn category(id: &str, is_animal: bool, group: FoodGroup) -> CategoryRecord {
    CategoryRecord {
        id: id.to_owned(),
        is_animal,
        food_group: Some(group),
    }
}

fn band(
    age_min: u32,
    age_max: u32,
    level: EducationLevel,
    grade: u8,
    gender: Gender,
) -> AgeGroupRecord {
    AgeGroupRecord {
        age_min,
        age_max,
        education_level: level,
        grade,
        default_gender: gender,
    }
}

fn education(
    level: EducationLevel,
    class_min: u8,
    class_max: u8,
    group_id: &str,
) -> EducationGroupRecord {
    EducationGroupRecord {
        level,
        class_min,
        class_max,
        group_id: group_id.to_owned(),
    }
}

#[allow(clippy::too_many_arguments)]
fn standard(
    group_id: &str,
    energy: (f64, f64),
    protein: f64,
    animal_protein: f64,
    carbohydrate: f64,
    fiber: f64,
    requirements: CategoryRequirements,
) -> StandardRecord {
    StandardRecord {
        group_id: group_id.to_owned(),
        min_energy_kcal: energy.0,
        max_energy_kcal: energy.1,
        min_protein_g: protein,
        min_animal_protein_g: animal_protein,
        min_carbohydrate_g: carbohydrate,
        min_fiber_g: fiber,
        requirements,
    }
}

/// Fixture tables built directly from records
pub fn reference_tables() -> ReferenceTables {
    let upper_primary = CategoryRequirements {
        req_protein: true,
        req_carb: true,
        req_veg: true,
        req_fruit: false,
    };
    let all_categories = CategoryRequirements {
        req_protein: true,
        req_carb: true,
        req_veg: true,
        req_fruit: true,
    };

    ReferenceTables {
        foods: FoodCompositionTable::from_records([
            food("1", "Nasi Putih", 10.0, 5.0, 20.0, 2.0),
            food("2", "Telur Rebus", 12.4, 10.8, 0.7, 0.0),
            food("3", "Bayam Rebus", 3.5, 0.5, 6.5, 2.2),
            food("4", "Pisang Ambon", 1.2, 0.3, 25.8, 2.6),
            food("5", "Tempe Goreng", 20.8, 8.8, 13.5, 1.4),
        ]),
        categories: CategoryTable::from_records([
            category("1", false, FoodGroup::Staple),
            category("2", true, FoodGroup::Protein),
            category("3", false, FoodGroup::Vegetable),
            category("4", false, FoodGroup::Fruit),
            category("5", false, FoodGroup::Protein),
        ]),
        age_groups: AgeGroupTable::from_records([
            band(7, 7, EducationLevel::Sd, 1, Gender::Unspecified),
            band(8, 8, EducationLevel::Sd, 2, Gender::Unspecified),
            band(9, 9, EducationLevel::Sd, 3, Gender::Female),
            band(10, 10, EducationLevel::Sd, 4, Gender::Female),
            band(11, 12, EducationLevel::Sd, 5, Gender::Male),
            band(13, 15, EducationLevel::Smp, 8, Gender::Unspecified),
            band(16, 18, EducationLevel::Sma, 11, Gender::Unspecified),
        ]),
        education_groups: EducationGroupTable::from_records([
            education(EducationLevel::Sd, 1, 3, "SD_1_3"),
            education(EducationLevel::Sd, 4, 6, "SD_4_6_L"),
            education(EducationLevel::Sd, 4, 6, "SD_4_6_P"),
            education(EducationLevel::Smp, 7, 9, "SMP_7_9"),
            education(EducationLevel::Sma, 10, 12, "SMA_10_12"),
        ]),
        standards: StandardTable::from_records([
            standard(
                "SD_1_3",
                (400.0, 600.0),
                15.0,
                5.0,
                60.0,
                4.0,
                CategoryRequirements::default(),
            ),
            standard("SD_4_6_L", (500.0, 750.0), 20.0, 7.0, 75.0, 5.0, upper_primary),
            standard("SD_4_6_P", (480.0, 720.0), 19.0, 7.0, 72.0, 5.0, upper_primary),
            standard("SMP_7_9", (600.0, 900.0), 25.0, 9.0, 90.0, 6.0, all_categories),
        ]),
        portions: PortionTable::from_records([
            PortionRecord {
                food_name: "Nasi Putih".to_owned(),
                unit: "centong".to_owned(),
                gram: 100.0,
            },
            PortionRecord {
                food_name: "Telur Rebus".to_owned(),
                unit: "butir".to_owned(),
                gram: 55.0,
            },
        ]),
    }
}

/// Menu that satisfies `SD_1_3` in strict mode
///
/// Totals: energy 592.56 kcal, protein 32.14 g, animal protein 7.44 g,
/// carbohydrate 72.72 g, fiber 8.8 g.
pub fn passing_lower_primary_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", 200.0),
        MenuItem::new("2", 60.0),
        MenuItem::new("3", 100.0),
        MenuItem::new("4", 100.0),
    ]
}

/// Sheets equivalent to `reference_tables()`, using the Indonesian headers
/// of the published dataset
pub const CLEAN_DATA_CSV: &str = "\u{feff}id;nama;Protein (g);Lemak (g);Karbohidrat (g);Serat (g)
1;Nasi Putih;10;5;20;2
2;Telur Rebus;12,4;10,8;0,7;0
3;Bayam Rebus;3,5;0,5;6,5;2,2
4;Pisang Ambon;1,2;0,3;25,8;2,6
5;Tempe Goreng;20,8;8,8;13,5;1,4
";

pub const FOOD_CATEGORY_CSV: &str = "id;is_animal;kategori
1;0;Makanan Pokok
2;1;Lauk Pauk
3;0;Sayuran
4;0;Buah
5;0;Lauk Pauk
";

pub const AGE_GROUP_CSV: &str = "age_min;age_max;education_level;grade;default_gender
7;7;SD;1;all
8;8;SD;2;all
9;9;SD;3;P
10;10;SD;4;P
11;12;SD;5;L
13;15;SMP;8;all
16;18;SMA;11;all
";

pub const EDUCATION_GROUP_CSV: &str = "jenjang;kelas_min;kelas_max;group_id
SD;1;3;SD_1_3
SD;4;6;SD_4_6_L
SD;4;6;SD_4_6_P
SMP;7;9;SMP_7_9
SMA;10;12;SMA_10_12
";

pub const STANDAR_MBG_CSV: &str = "group_id;min_energy_kcal;max_energy_kcal;min_protein_g;min_animal_protein_g;min_carbohydrate_g;min_fiber_g;req_protein;req_carb;req_veg;req_fruit
SD_1_3;400;600;15;5;60;4;0;0;0;0
SD_4_6_L;500;750;20;7;75;5;1;1;1;0
SD_4_6_P;480;720;19;7;72;5;1;1;1;0
SMP_7_9;600;900;25;9;90;6;1;1;1;1
";

pub const TAKARAN_CSV: &str = "food_name;unit;gram
Nasi Putih;centong;100
Telur Rebus;butir;55
";

/// Write the fixture sheets into `dir`; `takaran.csv` only when `with_portions`
pub fn write_reference_files(dir: &Path, with_portions: bool) {
    fs::write(dir.join("clean_data.csv"), CLEAN_DATA_CSV).unwrap();
    fs::write(dir.join("food_category.csv"), FOOD_CATEGORY_CSV).unwrap();
    fs::write(dir.join("age_group.csv"), AGE_GROUP_CSV).unwrap();
    fs::write(dir.join("education_group.csv"), EDUCATION_GROUP_CSV).unwrap();
    fs::write(dir.join("standar_mbg.csv"), STANDAR_MBG_CSV).unwrap();
    if with_portions {
        fs::write(dir.join("takaran.csv"), TAKARAN_CSV).unwrap();
    }
}
