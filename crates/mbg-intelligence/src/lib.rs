// ABOUTME: MBG menu evaluation engine: nutrient computation and standards compliance
// ABOUTME: Stateless, pure functions over immutable reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

#![deny(unsafe_code)]

//! # MBG Intelligence
//!
//! Evaluates whether a school meal menu satisfies the MBG nutrition standard
//! for a student's group. The pipeline is:
//!
//! 1. [`nutrition_calculator`] turns each `(food id, grams)` pair into nutrient
//!    amounts and sums them into menu totals
//! 2. [`group_resolver`] places the student (by age or class label) into a
//!    standard group
//! 3. [`standards`] fetches the group's thresholds
//! 4. [`compliance`] compares totals and category coverage against them
//!
//! [`evaluator::MenuEvaluator`] runs the whole pipeline. Nothing here keeps
//! state between calls; every evaluation is a pure function of its inputs and
//! the reference tables, so evaluations can run concurrently without locking.

/// Engine configuration (compliance mode, empty-menu policy, parallelism)
pub mod config;

/// Per-item nutrient computation and aggregation
pub mod nutrition_calculator;

/// Student group resolution from age or class label
pub mod group_resolver;

/// Standard lookup by group id
pub mod standards;

/// Compliance evaluation against an MBG standard
pub mod compliance;

/// Household portion to gram conversion
pub mod portion;

/// End-to-end menu evaluation
pub mod evaluator;

pub use config::{EmptyMenuPolicy, EvaluationConfig};
pub use evaluator::{MenuEvaluation, MenuEvaluator};
