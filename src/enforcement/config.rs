//! Rule configuration loaded from JSON.

use crate::enforcement::rules::DEFAULT_SENSITIVITY_THRESHOLD_HOURS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating rule configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed rule configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Sensitivity threshold must be a finite, non-negative number of hours (got {0})")]
    InvalidThreshold(f64),
}

/// Tunable rule parameters. Missing keys take their defaults.
///
/// # Example
///
/// ```rust
/// use motionguard::enforcement::RuleConfig;
///
/// let config = RuleConfig::from_json(r#"{ "sensitivityThresholdHours": 6 }"#).unwrap();
/// assert_eq!(config.sensitivity_threshold_hours, 6.0);
///
/// let config = RuleConfig::from_json("{}").unwrap();
/// assert_eq!(config.sensitivity_threshold_hours, 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleConfig {
    pub sensitivity_threshold_hours: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            sensitivity_threshold_hours: DEFAULT_SENSITIVITY_THRESHOLD_HOURS,
        }
    }
}

impl RuleConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let hours = self.sensitivity_threshold_hours;
        if !hours.is_finite() || hours < 0.0 {
            return Err(ConfigError::InvalidThreshold(hours));
        }
        Ok(())
    }
}
