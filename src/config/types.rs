//! Configuration type definitions.

use serde::Deserialize;

use super::ConfigError;

/// Fraction of the original length that should survive stripping.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Settings for a detex run.
///
/// YAML format:
/// ```yaml
/// # Warn when less than 40% of a file's characters remain
/// threshold: 0.4
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetexConfig {
    /// Advisory threshold in `[0.0, 1.0]`
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for DetexConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DetexConfig {
    /// Check that the threshold is a fraction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(ConfigError::Validation(format!(
                "invalid config: 'threshold' must be between 0.0 and 1.0, got {}",
                self.threshold
            )))
        }
    }
}
