//! Business rules over readings.
//!
//! Two rules are evaluated:
//!
//! - The sensitivity rule compares a reading's timestamp with the last
//!   record of the opposite state and fires when strictly more than the
//!   threshold (12 hours by default) has elapsed.
//! - The overconsumption rule fires when a meter draws more than its rated
//!   maximum, attributing the draw to the motion reading. Only moving
//!   readings qualify.
//!
//! # Example
//!
//! ```rust
//! use motionguard::enforcement::{RuleConfig, RulesBuilder};
//!
//! let config = RuleConfig::from_json(r#"{ "sensitivityThresholdHours": 8 }"#).unwrap();
//! let rules = RulesBuilder::from_config(&config).build().unwrap();
//! assert_eq!(rules.sensitivity().threshold_hours(), 8.0);
//! ```

pub mod builder;
pub mod config;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::RulesBuilder;
pub use config::{ConfigError, RuleConfig};
pub use rules::{
    OverconsumptionRule, RuleSet, SensitivityRule, DEFAULT_SENSITIVITY_THRESHOLD_HOURS,
};
pub use violations::Alert;
