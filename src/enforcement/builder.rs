//! Builder API for creating rule sets.

use crate::enforcement::config::{ConfigError, RuleConfig};
use crate::enforcement::rules::{
    OverconsumptionRule, RuleSet, SensitivityRule, DEFAULT_SENSITIVITY_THRESHOLD_HOURS,
};

/// Builder for creating a [`RuleSet`]
pub struct RulesBuilder {
    sensitivity_threshold_hours: f64,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self {
            sensitivity_threshold_hours: DEFAULT_SENSITIVITY_THRESHOLD_HOURS,
        }
    }

    /// Start from loaded configuration
    pub fn from_config(config: &RuleConfig) -> Self {
        Self::new().sensitivity_threshold_hours(config.sensitivity_threshold_hours)
    }

    /// Set hours between opposite-state readings before alerting
    pub fn sensitivity_threshold_hours(mut self, hours: f64) -> Self {
        self.sensitivity_threshold_hours = hours;
        self
    }

    /// Build the rule set, rejecting an unusable threshold
    pub fn build(self) -> Result<RuleSet, ConfigError> {
        RuleConfig {
            sensitivity_threshold_hours: self.sensitivity_threshold_hours,
        }
        .validate()?;

        Ok(RuleSet {
            sensitivity: SensitivityRule::new(self.sensitivity_threshold_hours),
            overconsumption: OverconsumptionRule,
        })
    }
}

impl Default for RulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_uses_twelve_hours() {
        let rules = RulesBuilder::new().build().unwrap();
        assert_eq!(rules.sensitivity().threshold_hours(), 12.0);
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn threshold_is_stored() {
        let rules = RulesBuilder::new()
            .sensitivity_threshold_hours(3.5)
            .build()
            .unwrap();
        assert_eq!(rules.sensitivity().threshold_hours(), 3.5);
    }

    #[test]
    fn from_config_carries_threshold() {
        let config = RuleConfig {
            sensitivity_threshold_hours: 24.0,
        };
        let rules = RulesBuilder::from_config(&config).build().unwrap();
        assert_eq!(rules.sensitivity().threshold_hours(), 24.0);
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let result = RulesBuilder::new()
            .sensitivity_threshold_hours(f64::NAN)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))));
    }
}
