// ABOUTME: `evaluate` command - computes menu nutrients and checks MBG compliance
// ABOUTME: Builds menu items from grams, named foods, or household measures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

use super::{output_format, report_error, DataArgs, Outcome, StudentArgs};
use crate::helpers::display::print_output;
use crate::helpers::parse::{parse_food, parse_item, parse_serving, FoodPortion, Serving};
use anyhow::Result;
use clap::Args;
use mbg_menu_validator::formatters::render_evaluation;
use mbg_menu_validator::intelligence::config::EvaluationConfig;
use mbg_menu_validator::intelligence::portion::serving_to_menu_item;
use mbg_menu_validator::intelligence::{EmptyMenuPolicy, MenuEvaluator};
use mbg_menu_validator::models::{ComplianceMode, MenuItem};
use mbg_menu_validator::tables::ReferenceTables;
use mbg_menu_validator::EvaluationError;
use tracing::debug;

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub student: StudentArgs,

    /// Menu item as ID:GRAMS (repeatable)
    #[arg(long = "item", value_name = "ID:GRAMS", value_parser = parse_item)]
    pub items: Vec<MenuItem>,

    /// Menu item as NAME:GRAMS, looked up by food name (repeatable)
    #[arg(long = "food", value_name = "NAME:GRAMS", value_parser = parse_food)]
    pub foods: Vec<FoodPortion>,

    /// Menu item as a NAME:UNIT household measure (repeatable)
    #[arg(long = "serving", value_name = "NAME:UNIT", value_parser = parse_serving)]
    pub servings: Vec<Serving>,

    /// Verdict mode: strict or energy-floor (defaults to the environment setting)
    #[arg(long)]
    pub mode: Option<ComplianceMode>,

    /// Evaluate an empty menu as all-zero totals instead of rejecting it
    #[arg(long)]
    pub allow_empty: bool,

    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

impl EvaluateArgs {
    fn config(&self) -> EvaluationConfig {
        let mut config = *EvaluationConfig::global();
        if let Some(mode) = self.mode {
            config = config.with_compliance_mode(mode);
        }
        if self.allow_empty {
            config = config.with_empty_menu_policy(EmptyMenuPolicy::ZeroTotals);
        }
        config
    }

    /// Menu in flag order: `--item`, then `--food`, then `--serving`
    fn menu(&self, tables: &ReferenceTables) -> Result<Vec<MenuItem>, EvaluationError> {
        let mut menu = self.items.clone();

        for food in &self.foods {
            let record = tables
                .foods
                .find_by_name(&food.name)
                .ok_or_else(|| EvaluationError::food_not_found(food.name.trim()))?;
            menu.push(MenuItem::new(record.id.clone(), food.gram));
        }

        for serving in &self.servings {
            menu.push(serving_to_menu_item(
                &serving.food_name,
                &serving.unit,
                &tables.portions,
                &tables.foods,
            )?);
        }

        debug!(items = menu.len(), "Menu assembled");
        Ok(menu)
    }
}

/// Run the `evaluate` command
pub fn run(args: &EvaluateArgs) -> Result<Outcome> {
    let format = output_format(args.json);
    let tables = args.data.load()?;
    let evaluator = MenuEvaluator::new(&tables, args.config());

    let evaluation = args
        .menu(&tables)
        .and_then(|menu| evaluator.evaluate_menu(&menu, &args.student.profile()));

    match evaluation {
        Ok(evaluation) => {
            print_output(&render_evaluation(&evaluation, format)?);
            Ok(if evaluation.passed() {
                Outcome::Pass
            } else {
                Outcome::Fail
            })
        }
        Err(e) => report_error(&e, format),
    }
}
