//! Business rules evaluated against readings.
//!
//! Rules are pure: they take the reading and whatever baseline they need
//! and return the alerts that fire. Fetching baselines and delivering
//! alerts is the job of [`crate::effects`].

use crate::core::{
    assert_is_moving, elapsed_hours, exceeds_hours, is_power_consumption_high, HistoricalRecord,
    MeterReading, MotionReading, MotionState, ValidationError,
};
use crate::enforcement::violations::Alert;

/// Hours between opposite-state readings before sensitivity is suspect.
pub const DEFAULT_SENSITIVITY_THRESHOLD_HOURS: f64 = 12.0;

/// Flags a sensor that has stayed in one state for too long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRule {
    threshold_hours: f64,
}

impl SensitivityRule {
    pub(crate) fn new(threshold_hours: f64) -> Self {
        Self { threshold_hours }
    }

    pub fn threshold_hours(&self) -> f64 {
        self.threshold_hours
    }

    /// The state whose last record serves as the baseline for `motion`.
    pub fn baseline_state(motion: &MotionReading) -> MotionState {
        motion.state().opposite()
    }

    /// Compare a reading with the last record of the opposite state.
    ///
    /// Fires only when strictly more than the threshold has elapsed. A
    /// baseline newer than the reading gives negative elapsed time and
    /// never fires.
    pub fn evaluate(&self, motion: &MotionReading, baseline: &HistoricalRecord) -> Option<Alert> {
        if !exceeds_hours(baseline.timestamp, motion.timestamp, self.threshold_hours) {
            return None;
        }
        let diff_hours = elapsed_hours(baseline.timestamp, motion.timestamp);

        let device_id = motion.device_id.clone();
        Some(match motion.state() {
            MotionState::Static => Alert::SensitivityTooLow {
                device_id,
                elapsed_hours: diff_hours,
            },
            MotionState::Moving => Alert::SensitivityTooHigh {
                device_id,
                elapsed_hours: diff_hours,
            },
        })
    }
}

impl Default for SensitivityRule {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY_THRESHOLD_HOURS)
    }
}

/// Flags a moving device drawing more than its rated maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverconsumptionRule;

impl OverconsumptionRule {
    /// Returns no alerts when consumption is within limits; the motion
    /// reading is not inspected in that case. Otherwise the reading must be
    /// moving, and the validation error is returned as-is if it is not.
    pub fn evaluate(
        &self,
        motion: &MotionReading,
        meter: &MeterReading,
    ) -> Result<Vec<Alert>, ValidationError> {
        if !is_power_consumption_high(meter) {
            return Ok(Vec::new());
        }

        let speed = assert_is_moving(motion)?;

        Ok(vec![
            Alert::HighPowerDraw {
                device_id: meter.device_id.clone(),
                power_consumption: meter.power_consumption,
                maximum_power_consumption: meter.maximum_power_consumption,
            },
            Alert::MotionAttributed {
                device_id: motion.device_id.clone(),
                sensor_id: motion.sensor_id.clone(),
                speed,
            },
        ])
    }
}

/// Every rule the monitor evaluates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub(crate) sensitivity: SensitivityRule,
    pub(crate) overconsumption: OverconsumptionRule,
}

impl RuleSet {
    pub fn sensitivity(&self) -> &SensitivityRule {
        &self.sensitivity
    }

    pub fn overconsumption(&self) -> &OverconsumptionRule {
        &self.overconsumption
    }
}
