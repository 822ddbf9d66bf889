// ABOUTME: Configuration error types for engine settings validation
// ABOUTME: Defines error variants for malformed environment values and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Configuration error types for engine settings.

use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse a configuration value
    #[error("Parse error for {key}: {reason}")]
    Parse {
        /// Setting or environment variable name
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
