// ABOUTME: End-to-end MBG menu evaluation over immutable reference tables
// ABOUTME: Computes items, aggregates, resolves the student group, and checks compliance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Menu Evaluator
//!
//! `MenuEvaluator` is the engine entry point. It borrows a `ReferenceTables`
//! snapshot and holds no other state, so one evaluator can serve any number
//! of concurrent requests.

use crate::compliance::evaluate_compliance;
use crate::config::{EmptyMenuPolicy, EvaluationConfig};
use crate::group_resolver::{resolve_group, ResolvedGroup};
use crate::nutrition_calculator::{aggregate, calculate_menu_items};
use crate::standards::get_standard;
use mbg_core::models::{
    CategoryCoverage, ComplianceResult, MenuItem, NutrientTotals, StandardRecord, StudentProfile,
};
use mbg_core::tables::ReferenceTables;
use mbg_core::{EvaluationError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Result of evaluating one menu for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEvaluation {
    /// Aggregated menu nutrients (unrounded)
    pub totals: NutrientTotals,
    /// Resolved student group
    #[serde(flatten)]
    pub group: ResolvedGroup,
    /// Standard the menu was checked against
    pub standard: StandardRecord,
    /// Food categories present in the menu
    pub coverage: CategoryCoverage,
    /// Compliance verdict
    pub compliance: ComplianceResult,
}

impl MenuEvaluation {
    /// Resolved standard group id
    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group.group_id
    }

    /// Overall verdict
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.compliance.passed
    }
}

/// Evaluates menus against the MBG standard
#[derive(Debug, Clone, Copy)]
pub struct MenuEvaluator<'a> {
    tables: &'a ReferenceTables,
    config: EvaluationConfig,
}

impl<'a> MenuEvaluator<'a> {
    /// Create an evaluator over `tables`
    #[must_use]
    pub const fn new(tables: &'a ReferenceTables, config: EvaluationConfig) -> Self {
        Self { tables, config }
    }

    /// Create an evaluator using the global configuration
    #[must_use]
    pub fn with_global_config(tables: &'a ReferenceTables) -> Self {
        Self::new(tables, *EvaluationConfig::global())
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Menu totals without standard checks
    ///
    /// # Errors
    ///
    /// Returns `InvalidPortion` or `FoodNotFound` for the first bad item
    pub fn menu_totals(&self, items: &[MenuItem]) -> Result<NutrientTotals> {
        let per_item = calculate_menu_items(
            items,
            &self.tables.foods,
            &self.tables.categories,
            self.config.runs_parallel(items.len()),
        )?;
        Ok(aggregate(&per_item))
    }

    /// Food categories present among the menu items
    #[must_use]
    pub fn coverage(&self, items: &[MenuItem]) -> CategoryCoverage {
        CategoryCoverage::from_groups(
            items
                .iter()
                .filter_map(|item| self.tables.categories.food_group(&item.food_id)),
        )
    }

    /// Evaluate a menu for a student
    ///
    /// Item computation and group resolution are independent; on large menus
    /// they run side by side on the rayon pool. When both fail, the item
    /// error is reported.
    ///
    /// # Errors
    ///
    /// Returns `EmptyMenu` (when rejected by policy), `InvalidPortion`,
    /// `FoodNotFound`, `AgeOutOfRange`, `UnparsableClass`, `GroupNotFound`,
    /// or `StandardNotFound`
    pub fn evaluate_menu(
        &self,
        items: &[MenuItem],
        student: &StudentProfile,
    ) -> Result<MenuEvaluation> {
        if items.is_empty() && self.config.empty_menu_policy == EmptyMenuPolicy::Reject {
            return Err(EvaluationError::EmptyMenu);
        }

        let resolve = || {
            resolve_group(
                student,
                &self.tables.age_groups,
                &self.tables.education_groups,
            )
        };

        let (totals, group) = if self.config.runs_parallel(items.len()) {
            rayon::join(|| self.menu_totals(items), resolve)
        } else {
            (self.menu_totals(items), resolve())
        };
        let totals = totals?;
        let group = group?;

        let standard = get_standard(&group.group_id, &self.tables.standards)?.clone();
        let coverage = self.coverage(items);
        let compliance = evaluate_compliance(
            &totals,
            &standard,
            Some(&coverage),
            self.config.compliance_mode,
        );

        info!(
            group.id = %group.group_id,
            menu.items = items.len(),
            totals.energy = totals.energy,
            energy.status = %compliance.energy_status,
            compliance.mode = ?compliance.mode,
            compliance.passed = compliance.passed,
            "Menu evaluated"
        );

        Ok(MenuEvaluation {
            totals,
            group,
            standard,
            coverage,
            compliance,
        })
    }
}
