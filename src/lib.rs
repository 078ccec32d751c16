//! Motionguard: narrowing and alert rules for sensor readings
//!
//! Motionguard follows a "pure core, imperative shell" layout. Readings
//! arrive untrusted; pure validators narrow them into values whose
//! invariants are carried by their types, and pure rules decide which
//! alerts fire. The async shell fetches baselines, persists validated
//! readings and delivers alerts through capability traits.
//!
//! # Core Concepts
//!
//! - **Readings**: [`MotionReading`] is static or moving; a moving one
//!   carries an untrusted speed
//! - **Narrowing**: [`validate_moving`] turns a reading into a
//!   [`MovingReading`] whose [`Speed`] is finite and positive
//! - **Rules**: the sensitivity rule and the overconsumption rule
//! - **Monitor**: [`MotionMonitor`] runs the rules against a history store,
//!   a persistence store and an alert sink
//!
//! # Example
//!
//! ```rust
//! use motionguard::core::{validate_moving, MotionReading, Sensitivity, ValidationError};
//! use chrono::Utc;
//!
//! let reading = MotionReading::moving("pir-1", "dev-1", Utc::now(), Sensitivity::Medium, 3.0);
//! let moving = validate_moving(&reading).unwrap();
//! assert_eq!(moving.speed().get(), 3.0);
//!
//! let stalled = MotionReading::moving("pir-1", "dev-1", Utc::now(), Sensitivity::Medium, 0.0);
//! assert!(matches!(
//!     validate_moving(&stalled),
//!     Err(ValidationError::NotMoving { .. })
//! ));
//! ```

pub mod core;
pub mod effects;
pub mod enforcement;
pub mod ingest;

// Re-export commonly used types
pub use core::{
    validate_moving, MeterReading, MotionReading, MotionState, MovingReading, Speed,
    ValidationError,
};
pub use effects::{AlertSink, HistoryLookup, MonitorError, MotionMonitor, Persistence};
pub use enforcement::{Alert, RuleSet, RulesBuilder};
