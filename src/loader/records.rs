// ABOUTME: Converts parsed reference sheets into typed mbg-core tables
// ABOUTME: Coerces nutrient cells tolerantly and rejects malformed structural cells
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use super::columns::{
    Column, AGE_MAX, AGE_MIN, CARBOHYDRATE_G, CLASS_MAX, CLASS_MIN, DEFAULT_GENDER,
    EDUCATION_LEVEL, FAT_G, FIBER_G, FOOD_GROUP, FOOD_ID, FOOD_NAME, GRADE, GROUP_ID, IS_ANIMAL,
    LEVEL, MAX_ENERGY_KCAL, MIN_ANIMAL_PROTEIN_G, MIN_CARBOHYDRATE_G, MIN_ENERGY_KCAL,
    MIN_FIBER_G, MIN_PROTEIN_G, PORTION_FOOD_NAME, PORTION_GRAM, PORTION_UNIT, PROTEIN_G,
    REQ_CARB, REQ_FRUIT, REQ_PROTEIN, REQ_VEG,
};
use super::delimited::{RawRow, RawTable};
use super::LoadError;
use mbg_core::coercion::{coerce_bool, try_number};
use mbg_core::models::{
    AgeGroupRecord, CategoryRecord, CategoryRequirements, EducationGroupRecord, EducationLevel,
    FoodCompositionRecord, FoodGroup, Gender, PortionRecord, StandardRecord,
};
use mbg_core::tables::{
    AgeGroupTable, CategoryTable, EducationGroupTable, FoodCompositionTable, PortionTable,
    StandardTable,
};
use tracing::{debug, warn};

/// Counts cells that had to be coerced or rows that were skipped in one sheet
struct Tally {
    table: &'static str,
    coerced: usize,
    skipped: usize,
}

impl Tally {
    const fn new(table: &'static str) -> Self {
        Self {
            table,
            coerced: 0,
            skipped: 0,
        }
    }

    /// Numeric cell; unreadable values count as zero
    fn number(&mut self, row: &RawRow, index: usize) -> f64 {
        try_number(row.cell(index)).unwrap_or_else(|| {
            self.coerced += 1;
            0.0
        })
    }

    /// Skip a row that lacks its key
    fn skip(&mut self, row: &RawRow, column: &Column) {
        debug!(
            table = self.table,
            line = row.line(),
            column = column.name,
            "Skipping row without key"
        );
        self.skipped += 1;
    }

    fn report(&self, loaded: usize) {
        if self.coerced > 0 || self.skipped > 0 {
            warn!(
                table = self.table,
                rows = loaded,
                coerced_cells = self.coerced,
                skipped_rows = self.skipped,
                "Reference sheet had unreadable cells; numbers coerced to 0"
            );
        }
    }
}

/// Optional flag column; absent columns read as `false`
fn flag(row: &RawRow, index: Option<usize>) -> bool {
    index.is_some_and(|index| coerce_bool(row.cell(index)))
}

/// Whole non-negative number in a structural column
fn integer<T: TryFrom<u64>>(
    table: &RawTable,
    row: &RawRow,
    index: usize,
    column: &Column,
) -> Result<T, LoadError> {
    let raw = row.cell(index);
    try_number(raw)
        .filter(|value| value.fract() == 0.0)
        .and_then(|value| T::try_from(value as u64).ok())
        .ok_or_else(|| invalid(table, row, column, raw))
}

fn level(
    table: &RawTable,
    row: &RawRow,
    index: usize,
    column: &Column,
) -> Result<EducationLevel, LoadError> {
    let raw = row.cell(index);
    EducationLevel::from_str_lossy(raw).ok_or_else(|| invalid(table, row, column, raw))
}

fn invalid(table: &RawTable, row: &RawRow, column: &Column, raw: &str) -> LoadError {
    LoadError::InvalidValue {
        table: table.name(),
        line: row.line(),
        column: column.name,
        value: raw.to_owned(),
    }
}

/// Food composition per 100 g
///
/// # Errors
///
/// Returns `MissingColumn` if an id, name, or nutrient column is absent
pub fn food_composition(table: &RawTable) -> Result<FoodCompositionTable, LoadError> {
    let id = table.column(&FOOD_ID)?;
    let name = table.column(&FOOD_NAME)?;
    let protein = table.column(&PROTEIN_G)?;
    let fat = table.column(&FAT_G)?;
    let carbohydrate = table.column(&CARBOHYDRATE_G)?;
    let fiber = table.column(&FIBER_G)?;

    let mut tally = Tally::new(table.name());
    let mut records = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        if row.cell(id).is_empty() {
            tally.skip(row, &FOOD_ID);
            continue;
        }
        records.push(FoodCompositionRecord {
            id: row.cell(id).to_owned(),
            name: row.cell(name).to_owned(),
            protein_g: tally.number(row, protein),
            fat_g: tally.number(row, fat),
            carbohydrate_g: tally.number(row, carbohydrate),
            fiber_g: tally.number(row, fiber),
        });
    }

    tally.report(records.len());
    Ok(FoodCompositionTable::from_records(records))
}

/// Animal/plant classification with optional food group
///
/// # Errors
///
/// Returns `MissingColumn` if the id or `is_animal` column is absent
pub fn categories(table: &RawTable) -> Result<CategoryTable, LoadError> {
    let id = table.column(&FOOD_ID)?;
    let is_animal = table.column(&IS_ANIMAL)?;
    let food_group = table.optional_column(&FOOD_GROUP);

    let mut tally = Tally::new(table.name());
    let mut records = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        if row.cell(id).is_empty() {
            tally.skip(row, &FOOD_ID);
            continue;
        }
        records.push(CategoryRecord {
            id: row.cell(id).to_owned(),
            is_animal: coerce_bool(row.cell(is_animal)),
            food_group: food_group.and_then(|index| FoodGroup::from_str_lossy(row.cell(index))),
        });
    }

    tally.report(records.len());
    Ok(CategoryTable::from_records(records))
}

/// Age bands
///
/// # Errors
///
/// Returns `MissingColumn` for absent columns and `InvalidValue` for ages,
/// grades, or levels that cannot be read
pub fn age_groups(table: &RawTable) -> Result<AgeGroupTable, LoadError> {
    let age_min = table.column(&AGE_MIN)?;
    let age_max = table.column(&AGE_MAX)?;
    let education_level = table.column(&EDUCATION_LEVEL)?;
    let grade = table.column(&GRADE)?;
    let default_gender = table.optional_column(&DEFAULT_GENDER);

    let records = table
        .rows()
        .iter()
        .map(|row| {
            Ok(AgeGroupRecord {
                age_min: integer(table, row, age_min, &AGE_MIN)?,
                age_max: integer(table, row, age_max, &AGE_MAX)?,
                education_level: level(table, row, education_level, &EDUCATION_LEVEL)?,
                grade: integer(table, row, grade, &GRADE)?,
                default_gender: default_gender
                    .map_or(Gender::Unspecified, |index| {
                        Gender::from_str_lossy(row.cell(index))
                    }),
            })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(AgeGroupTable::from_records(records))
}

/// Grade bands to standard group ids
///
/// # Errors
///
/// Returns `MissingColumn` for absent columns and `InvalidValue` for levels
/// or grades that cannot be read
pub fn education_groups(table: &RawTable) -> Result<EducationGroupTable, LoadError> {
    let level_index = table.column(&LEVEL)?;
    let class_min = table.column(&CLASS_MIN)?;
    let class_max = table.column(&CLASS_MAX)?;
    let group_id = table.column(&GROUP_ID)?;

    let mut tally = Tally::new(table.name());
    let mut records = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        if row.cell(group_id).is_empty() {
            tally.skip(row, &GROUP_ID);
            continue;
        }
        records.push(EducationGroupRecord {
            level: level(table, row, level_index, &LEVEL)?,
            class_min: integer(table, row, class_min, &CLASS_MIN)?,
            class_max: integer(table, row, class_max, &CLASS_MAX)?,
            group_id: row.cell(group_id).to_owned(),
        });
    }

    tally.report(records.len());
    Ok(EducationGroupTable::from_records(records))
}

/// MBG standards per group
///
/// Category requirement columns are optional and default to inactive.
///
/// # Errors
///
/// Returns `MissingColumn` if the group id or a threshold column is absent
pub fn standards(table: &RawTable) -> Result<StandardTable, LoadError> {
    let group_id = table.column(&GROUP_ID)?;
    let min_energy = table.column(&MIN_ENERGY_KCAL)?;
    let max_energy = table.column(&MAX_ENERGY_KCAL)?;
    let min_protein = table.column(&MIN_PROTEIN_G)?;
    let min_animal_protein = table.column(&MIN_ANIMAL_PROTEIN_G)?;
    let min_carbohydrate = table.column(&MIN_CARBOHYDRATE_G)?;
    let min_fiber = table.column(&MIN_FIBER_G)?;
    let req_protein = table.optional_column(&REQ_PROTEIN);
    let req_carb = table.optional_column(&REQ_CARB);
    let req_veg = table.optional_column(&REQ_VEG);
    let req_fruit = table.optional_column(&REQ_FRUIT);

    let mut tally = Tally::new(table.name());
    let mut records = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        if row.cell(group_id).is_empty() {
            tally.skip(row, &GROUP_ID);
            continue;
        }
        records.push(StandardRecord {
            group_id: row.cell(group_id).to_owned(),
            min_energy_kcal: tally.number(row, min_energy),
            max_energy_kcal: tally.number(row, max_energy),
            min_protein_g: tally.number(row, min_protein),
            min_animal_protein_g: tally.number(row, min_animal_protein),
            min_carbohydrate_g: tally.number(row, min_carbohydrate),
            min_fiber_g: tally.number(row, min_fiber),
            requirements: CategoryRequirements {
                req_protein: flag(row, req_protein),
                req_carb: flag(row, req_carb),
                req_veg: flag(row, req_veg),
                req_fruit: flag(row, req_fruit),
            },
        });
    }

    tally.report(records.len());
    Ok(StandardTable::from_records(records))
}

/// Household measures
///
/// Gram values are coerced like nutrients; a zero gram row is kept and
/// rejected only when a serving actually uses it.
///
/// # Errors
///
/// Returns `MissingColumn` if the food name, unit, or gram column is absent
pub fn portions(table: &RawTable) -> Result<PortionTable, LoadError> {
    let food_name = table.column(&PORTION_FOOD_NAME)?;
    let unit = table.column(&PORTION_UNIT)?;
    let gram = table.column(&PORTION_GRAM)?;

    let mut tally = Tally::new(table.name());
    let mut records = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        if row.cell(food_name).is_empty() || row.cell(unit).is_empty() {
            tally.skip(row, &PORTION_FOOD_NAME);
            continue;
        }
        records.push(PortionRecord {
            food_name: row.cell(food_name).to_owned(),
            unit: row.cell(unit).to_owned(),
            gram: tally.number(row, gram),
        });
    }

    tally.report(records.len());
    Ok(PortionTable::from_records(records))
}
