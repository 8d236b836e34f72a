//! JSON configuration for the LU kernel

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tolerances and execution settings shared by every kernel operation.
///
/// Missing fields fall back to their defaults when deserialized, so an empty
/// JSON object yields [`LuConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuConfig {
    /// Pivots with magnitude below this value are treated as singular
    #[serde(default = "default_pivot_tolerance")]
    pub pivot_tolerance: f64,
    /// Largest absolute residual accepted by the verifier
    #[serde(default = "default_residual_tolerance")]
    pub residual_tolerance: f64,
    /// Minimum dimension before the row update runs in parallel (`rayon` feature)
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    /// Log a summary of each operation when > 0
    #[serde(default)]
    pub verbosity: usize,
}

impl Default for LuConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: default_pivot_tolerance(),
            residual_tolerance: default_residual_tolerance(),
            parallel_threshold: default_parallel_threshold(),
            verbosity: 0,
        }
    }
}

fn default_pivot_tolerance() -> f64 {
    1e-12
}

fn default_residual_tolerance() -> f64 {
    1e-8
}

fn default_parallel_threshold() -> usize {
    256
}

impl LuConfig {
    /// Parse and validate a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: LuConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check that both tolerances are finite. The pivot tolerance must be
    /// strictly positive, the residual tolerance only non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pivot_tolerance.is_finite() && self.pivot_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance {
                name: "pivot_tolerance",
                value: self.pivot_tolerance,
            });
        }
        if !(self.residual_tolerance.is_finite() && self.residual_tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance {
                name: "residual_tolerance",
                value: self.residual_tolerance,
            });
        }
        Ok(())
    }

    /// Whether the row update should run in parallel for an `n`x`n` matrix.
    pub(crate) fn use_parallel(&self, n: usize) -> bool {
        crate::parallel::is_parallel_available() && n >= self.parallel_threshold
    }
}
