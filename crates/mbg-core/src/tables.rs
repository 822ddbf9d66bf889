// ABOUTME: Immutable reference-table snapshots with keyed lookups
// ABOUTME: Built once at the loading boundary and shared read-only by every evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Reference tables.
//!
//! Tables are constructed from already-validated records and never mutated
//! afterwards, so a single `ReferenceTables` can be shared across threads and
//! evaluated against concurrently. Keyed tables keep the first row for a
//! duplicated key, matching first-match-wins lookups on the ordered tables.

use crate::models::{
    AgeGroupRecord, CategoryRecord, EducationGroupRecord, EducationLevel, FoodCompositionRecord,
    FoodGroup, PortionRecord, StandardRecord,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::warn;

/// Case-insensitive key used for group ids
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Per-100 g composition of every known food
#[derive(Debug, Clone, Default)]
pub struct FoodCompositionTable {
    records: Vec<FoodCompositionRecord>,
    by_id: HashMap<String, usize>,
}

impl FoodCompositionTable {
    /// Build the table; later rows with an already-seen id are dropped
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = FoodCompositionRecord>>(records: I) -> Self {
        let mut table = Self::default();
        for record in records {
            match table.by_id.entry(record.id.trim().to_owned()) {
                Entry::Occupied(_) => warn!(food_id = %record.id, "Duplicate food id ignored"),
                Entry::Vacant(slot) => {
                    slot.insert(table.records.len());
                    table.records.push(record);
                }
            }
        }
        table
    }

    /// Composition record for `food_id`
    #[must_use]
    pub fn get(&self, food_id: &str) -> Option<&FoodCompositionRecord> {
        self.by_id
            .get(food_id.trim())
            .and_then(|&index| self.records.get(index))
    }

    /// First record whose name matches, ignoring case and surrounding whitespace
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&FoodCompositionRecord> {
        let wanted = normalize_key(name);
        self.records
            .iter()
            .find(|record| normalize_key(&record.name) == wanted)
    }

    /// Records in load order
    pub fn iter(&self) -> impl Iterator<Item = &FoodCompositionRecord> {
        self.records.iter()
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Animal/plant classification and food group per food id
///
/// Not every food has a row. A missing row means "not animal-derived, no group".
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    by_id: HashMap<String, CategoryRecord>,
}

impl CategoryTable {
    /// Build the table; the first row for an id wins
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = CategoryRecord>>(records: I) -> Self {
        let mut by_id = HashMap::new();
        for record in records {
            match by_id.entry(record.id.trim().to_owned()) {
                Entry::Occupied(_) => warn!(food_id = %record.id, "Duplicate category row ignored"),
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        Self { by_id }
    }

    /// Category row for `food_id`
    #[must_use]
    pub fn get(&self, food_id: &str) -> Option<&CategoryRecord> {
        self.by_id.get(food_id.trim())
    }

    /// Whether the food is animal-derived; unclassified foods are not
    #[must_use]
    pub fn is_animal(&self, food_id: &str) -> bool {
        self.get(food_id).is_some_and(|record| record.is_animal)
    }

    /// Food group of the food, if classified
    #[must_use]
    pub fn food_group(&self, food_id: &str) -> Option<FoodGroup> {
        self.get(food_id).and_then(|record| record.food_group)
    }

    /// Number of classified foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no food is classified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Ordered age bands; the first band containing an age wins
#[derive(Debug, Clone, Default)]
pub struct AgeGroupTable {
    rows: Vec<AgeGroupRecord>,
}

impl AgeGroupTable {
    /// Build the table, keeping row order
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = AgeGroupRecord>>(records: I) -> Self {
        Self {
            rows: records.into_iter().collect(),
        }
    }

    /// First band containing `age`
    #[must_use]
    pub fn find(&self, age: u32) -> Option<&AgeGroupRecord> {
        self.rows.iter().find(|row| row.contains(age))
    }

    /// Rows in table order
    #[must_use]
    pub fn rows(&self) -> &[AgeGroupRecord] {
        &self.rows
    }
}

/// Ordered grade bands mapped to group ids
#[derive(Debug, Clone, Default)]
pub struct EducationGroupTable {
    rows: Vec<EducationGroupRecord>,
}

impl EducationGroupTable {
    /// Build the table, keeping row order
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = EducationGroupRecord>>(records: I) -> Self {
        Self {
            rows: records.into_iter().collect(),
        }
    }

    /// Rows covering `grade` at `level`, in table order
    pub fn covering(
        &self,
        level: EducationLevel,
        grade: u8,
    ) -> impl Iterator<Item = &EducationGroupRecord> {
        self.rows.iter().filter(move |row| row.covers(level, grade))
    }

    /// Rows in table order
    #[must_use]
    pub fn rows(&self) -> &[EducationGroupRecord] {
        &self.rows
    }
}

/// MBG standards keyed by case-insensitive group id
#[derive(Debug, Clone, Default)]
pub struct StandardTable {
    by_group: HashMap<String, StandardRecord>,
}

impl StandardTable {
    /// Build the table; the first row for a group id wins
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = StandardRecord>>(records: I) -> Self {
        let mut by_group = HashMap::new();
        for record in records {
            match by_group.entry(normalize_key(&record.group_id)) {
                Entry::Occupied(_) => {
                    warn!(group_id = %record.group_id, "Duplicate standard row ignored");
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }
        Self { by_group }
    }

    /// Standard for `group_id`, ignoring letter case
    #[must_use]
    pub fn get(&self, group_id: &str) -> Option<&StandardRecord> {
        self.by_group.get(&normalize_key(group_id))
    }

    /// Number of standards
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_group.len()
    }

    /// Whether no standard is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_group.is_empty()
    }
}

/// Household measures in table order
#[derive(Debug, Clone, Default)]
pub struct PortionTable {
    rows: Vec<PortionRecord>,
}

impl PortionTable {
    /// Build the table, keeping row order
    #[must_use]
    pub fn from_records<I: IntoIterator<Item = PortionRecord>>(records: I) -> Self {
        Self {
            rows: records.into_iter().collect(),
        }
    }

    /// Rows in table order
    #[must_use]
    pub fn rows(&self) -> &[PortionRecord] {
        &self.rows
    }

    /// Whether the table has no measures
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every reference table an evaluation reads
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    /// Food composition per 100 g
    pub foods: FoodCompositionTable,
    /// Animal/plant classification and food groups
    pub categories: CategoryTable,
    /// Age bands
    pub age_groups: AgeGroupTable,
    /// Grade bands to group ids
    pub education_groups: EducationGroupTable,
    /// MBG standards
    pub standards: StandardTable,
    /// Household measures (optional; may be empty)
    pub portions: PortionTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, name: &str) -> FoodCompositionRecord {
        FoodCompositionRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            protein_g: 1.0,
            fat_g: 1.0,
            carbohydrate_g: 1.0,
            fiber_g: 1.0,
        }
    }

    fn standard(group_id: &str, min_energy_kcal: f64) -> StandardRecord {
        StandardRecord {
            group_id: group_id.to_owned(),
            min_energy_kcal,
            max_energy_kcal: 900.0,
            min_protein_g: 0.0,
            min_animal_protein_g: 0.0,
            min_carbohydrate_g: 0.0,
            min_fiber_g: 0.0,
            requirements: Default::default(),
        }
    }

    #[test]
    fn test_first_food_row_wins() {
        let table = FoodCompositionTable::from_records([food("1", "Nasi"), food("1", "Roti")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(" 1 ").map(|f| f.name.as_str()), Some("Nasi"));
    }

    #[test]
    fn test_find_food_by_name_ignores_case() {
        let table = FoodCompositionTable::from_records([food("7", "Nasi Putih")]);
        assert_eq!(table.find_by_name("  nasi putih").map(|f| f.id.as_str()), Some("7"));
        assert!(table.find_by_name("nasi merah").is_none());
    }

    #[test]
    fn test_missing_category_is_not_animal() {
        let table = CategoryTable::from_records([CategoryRecord {
            id: "2".to_owned(),
            is_animal: true,
            food_group: Some(FoodGroup::Protein),
        }]);
        assert!(table.is_animal("2"));
        assert!(!table.is_animal("3"));
        assert_eq!(table.food_group("3"), None);
    }

    #[test]
    fn test_standard_lookup_ignores_case() {
        let table = StandardTable::from_records([standard("SD_1_3", 450.0), standard("sd_1_3", 1.0)]);
        assert_eq!(table.len(), 1);
        let found = table.get("Sd_1_3").unwrap();
        assert!((found.min_energy_kcal - 450.0).abs() < f64::EPSILON);
    }
}
