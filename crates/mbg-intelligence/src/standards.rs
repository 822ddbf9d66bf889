// ABOUTME: Looks up the MBG standard for a resolved student group
// ABOUTME: Group ids are matched case-insensitively against the standard table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use mbg_core::models::StandardRecord;
use mbg_core::tables::StandardTable;
use mbg_core::{EvaluationError, Result};

/// Standard thresholds for `group_id`
///
/// Upstream group ids may differ in letter case from the standard table's
/// keys, so the match ignores case and surrounding whitespace.
///
/// # Errors
///
/// Returns `StandardNotFound` if no standard exists for the group
pub fn get_standard<'a>(group_id: &str, standards: &'a StandardTable) -> Result<&'a StandardRecord> {
    standards
        .get(group_id)
        .ok_or_else(|| EvaluationError::standard_not_found(group_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbg_core::models::CategoryRequirements;

    fn table() -> StandardTable {
        StandardTable::from_records([StandardRecord {
            group_id: "SMP_7_9_L".to_owned(),
            min_energy_kcal: 700.0,
            max_energy_kcal: 900.0,
            min_protein_g: 20.0,
            min_animal_protein_g: 8.0,
            min_carbohydrate_g: 90.0,
            min_fiber_g: 8.0,
            requirements: CategoryRequirements::default(),
        }])
    }

    #[test]
    fn test_lookup_ignores_case() {
        let standards = table();
        let standard = get_standard(" smp_7_9_l ", &standards).unwrap();
        assert_eq!(standard.group_id, "SMP_7_9_L");
    }

    #[test]
    fn test_missing_standard() {
        let standards = table();
        let err = get_standard("SMA_10_12_P", &standards).unwrap_err();
        assert_eq!(err, EvaluationError::standard_not_found("SMA_10_12_P"));
    }
}
