// ABOUTME: Main library entry point for the MBG school meal validator
// ABOUTME: Wires reference-table loading, logging, and report formatting around the evaluation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

#![deny(unsafe_code)]

//! # MBG Menu Validator
//!
//! Computes the nutrient content of school meal menus and checks them against
//! the MBG (Makan Bergizi Gratis) standard of the student's education group.
//!
//! ## Architecture
//!
//! - **`mbg-core`**: typed reference records, in-memory tables, error taxonomy
//! - **`mbg-intelligence`**: calculator, aggregator, group resolver, compliance
//!   evaluator, portion converter, and the `MenuEvaluator` entry point
//! - **this crate**: delimited reference-file loader, logging setup, report
//!   formatting, and the `mbg-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mbg_menu_validator::loader::TableLoader;
//! use mbg_menu_validator::intelligence::MenuEvaluator;
//! use mbg_menu_validator::models::{Gender, MenuItem, StudentProfile};
//!
//! # fn main() -> anyhow::Result<()> {
//! let tables = TableLoader::new("data").load()?;
//! let evaluator = MenuEvaluator::with_global_config(&tables);
//!
//! let menu = [MenuItem::new("11", 150.0), MenuItem::new("42", 60.0)];
//! let student = StudentProfile::by_age(9, Gender::Unspecified);
//! let evaluation = evaluator.evaluate_menu(&menu, &student)?;
//! println!("{} passed: {}", evaluation.group_id(), evaluation.passed());
//! # Ok(())
//! # }
//! ```

/// Report rendering for evaluation results
pub mod formatters;

/// Loading reference tables from delimited files
pub mod loader;

/// Tracing subscriber configuration
pub mod logging;

pub use mbg_core::{coercion, constants, errors, models, tables};
pub use mbg_core::{ErrorCode, EvaluationError, Result};

/// Evaluation engine
pub use mbg_intelligence as intelligence;
