// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: Compliance strictness, empty-menu policy, and parallel computation threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MBG Menu Validator Contributors

//! Evaluation Engine Configuration
//!
//! Defaults are the strict compliance mode, rejecting empty menus, and
//! computing items on the rayon pool once a menu has 64 items. Each setting
//! can be overridden from the environment:
//!
//! | Variable | Values |
//! |---|---|
//! | `MBG_COMPLIANCE_MODE` | `strict`, `energy_floor` |
//! | `MBG_EMPTY_MENU_POLICY` | `reject`, `zero_totals` |
//! | `MBG_PARALLEL_THRESHOLD` | `0` (never) or an item count ≥ 2 |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use mbg_core::models::ComplianceMode;
use serde::{Deserialize, Serialize};
use std::env;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable selecting the compliance mode
pub const ENV_COMPLIANCE_MODE: &str = "MBG_COMPLIANCE_MODE";
/// Environment variable selecting the empty-menu policy
pub const ENV_EMPTY_MENU_POLICY: &str = "MBG_EMPTY_MENU_POLICY";
/// Environment variable setting the parallel threshold
pub const ENV_PARALLEL_THRESHOLD: &str = "MBG_PARALLEL_THRESHOLD";

/// Default menu size from which items are computed in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Smallest non-zero parallel threshold
const MIN_PARALLEL_THRESHOLD: usize = 2;

/// Global configuration singleton
static EVALUATION_CONFIG: OnceLock<EvaluationConfig> = OnceLock::new();

/// What to do when a menu with no items is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyMenuPolicy {
    /// Fail with `EmptyMenu`
    #[default]
    Reject,
    /// Evaluate all-zero totals
    ZeroTotals,
}

impl FromStr for EmptyMenuPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "reject" => Ok(Self::Reject),
            "zero_totals" | "zero" | "allow" => Ok(Self::ZeroTotals),
            other => Err(format!("unknown empty menu policy: {other}")),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// How the overall verdict is derived
    pub compliance_mode: ComplianceMode,
    /// Handling of menus with no items
    pub empty_menu_policy: EmptyMenuPolicy,
    /// Menu size from which items are computed on the rayon pool; 0 disables
    pub parallel_threshold: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            compliance_mode: ComplianceMode::Strict,
            empty_menu_policy: EmptyMenuPolicy::Reject,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EvaluationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        EVALUATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load evaluation config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of `self`
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(raw) = read_env(ENV_COMPLIANCE_MODE)? {
            self.compliance_mode = raw.parse().map_err(|reason| ConfigError::Parse {
                key: ENV_COMPLIANCE_MODE,
                reason,
            })?;
        }

        if let Some(raw) = read_env(ENV_EMPTY_MENU_POLICY)? {
            self.empty_menu_policy = raw.parse().map_err(|reason| ConfigError::Parse {
                key: ENV_EMPTY_MENU_POLICY,
                reason,
            })?;
        }

        if let Some(raw) = read_env(ENV_PARALLEL_THRESHOLD)? {
            self.parallel_threshold = raw.trim().parse().map_err(|e: ParseIntError| {
                ConfigError::Parse {
                    key: ENV_PARALLEL_THRESHOLD,
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the parallel threshold is 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_threshold != 0 && self.parallel_threshold < MIN_PARALLEL_THRESHOLD {
            return Err(ConfigError::ValueOutOfRange(
                "parallel_threshold must be 0 (disabled) or at least 2",
            ));
        }
        Ok(())
    }

    /// Use `mode` for the overall verdict
    #[must_use]
    pub const fn with_compliance_mode(mut self, mode: ComplianceMode) -> Self {
        self.compliance_mode = mode;
        self
    }

    /// Use `policy` for empty menus
    #[must_use]
    pub const fn with_empty_menu_policy(mut self, policy: EmptyMenuPolicy) -> Self {
        self.empty_menu_policy = policy;
        self
    }

    /// Compute items in parallel from `threshold` items; 0 disables
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a menu of `item_count` items is computed in parallel
    #[must_use]
    pub const fn runs_parallel(&self, item_count: usize) -> bool {
        self.parallel_threshold != 0 && item_count >= self.parallel_threshold
    }
}

/// Read an optional environment variable; unset is `None`
fn read_env(key: &str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_COMPLIANCE_MODE);
        env::remove_var(ENV_EMPTY_MENU_POLICY);
        env::remove_var(ENV_PARALLEL_THRESHOLD);
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = EvaluationConfig::load().unwrap();
        assert_eq!(config, EvaluationConfig::default());
        assert_eq!(config.compliance_mode, ComplianceMode::Strict);
        assert_eq!(config.empty_menu_policy, EmptyMenuPolicy::Reject);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(ENV_COMPLIANCE_MODE, "energy_floor");
        env::set_var(ENV_EMPTY_MENU_POLICY, "zero-totals");
        env::set_var(ENV_PARALLEL_THRESHOLD, "0");

        let config = EvaluationConfig::load().unwrap();
        clear_env();

        assert_eq!(config.compliance_mode, ComplianceMode::EnergyFloor);
        assert_eq!(config.empty_menu_policy, EmptyMenuPolicy::ZeroTotals);
        assert!(!config.runs_parallel(10_000));
    }

    #[test]
    #[serial]
    fn test_malformed_env_is_rejected() {
        clear_env();
        env::set_var(ENV_PARALLEL_THRESHOLD, "many");
        let result = EvaluationConfig::load();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::Parse {
                key: ENV_PARALLEL_THRESHOLD,
                ..
            })
        ));
    }

    #[test]
    fn test_threshold_of_one_is_invalid() {
        let config = EvaluationConfig::default().with_parallel_threshold(1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_runs_parallel_from_threshold() {
        let config = EvaluationConfig::default().with_parallel_threshold(4);
        assert!(!config.runs_parallel(3));
        assert!(config.runs_parallel(4));
    }
}
