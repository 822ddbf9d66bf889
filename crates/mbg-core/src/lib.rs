// ABOUTME: Core types and constants for the MBG school meal validator
// ABOUTME: Foundation crate with reference records, tables, error taxonomy, and coercion policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

#![deny(unsafe_code)]

//! # MBG Core
//!
//! Foundation crate providing the shared vocabulary of the MBG menu validator.
//! Everything here is plain data: typed reference records, immutable lookup
//! tables built from them, and the error taxonomy every evaluation failure is
//! reported through. The crate changes rarely so the engine and the
//! application crates can compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: `EvaluationError` with stable `ErrorCode`s
//! - **constants**: energy conversion factors and reference portion size
//! - **coercion**: the single place where malformed numeric/boolean cells are tolerated
//! - **models**: food, student, standard, and compliance records
//! - **tables**: immutable reference-table snapshots with keyed lookups

/// Evaluation error taxonomy with stable error codes
pub mod errors;

/// Energy factors and reference quantities shared across the engine
pub mod constants;

/// Tolerant numeric and boolean coercion for reference-table cells
pub mod coercion;

/// Typed reference records and evaluation value types
pub mod models;

/// Immutable reference tables consumed by every evaluation
pub mod tables;

pub use errors::{ErrorCode, EvaluationError, Result};
