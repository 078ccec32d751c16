//! Alert sink backed by `tracing`.

use crate::effects::env::AlertSink;
use crate::enforcement::Alert;

/// Emits every alert as a `WARN` event with structured fields.
///
/// Installing a subscriber is left to the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AlertSink for TracingSink {
    fn alert(&self, alert: &Alert) {
        match alert {
            Alert::SensitivityTooLow {
                device_id,
                elapsed_hours,
            }
            | Alert::SensitivityTooHigh {
                device_id,
                elapsed_hours,
            } => {
                tracing::warn!(device_id = %device_id, elapsed_hours, "{alert}");
            }
            Alert::HighPowerDraw {
                device_id,
                power_consumption,
                maximum_power_consumption,
            } => {
                tracing::warn!(
                    device_id = %device_id,
                    power_consumption,
                    maximum_power_consumption,
                    "{alert}"
                );
            }
            Alert::MotionAttributed {
                device_id,
                sensor_id,
                speed,
            } => {
                tracing::warn!(
                    device_id = %device_id,
                    sensor_id = %sensor_id,
                    speed,
                    "{alert}"
                );
            }
        }
    }
}
