//! Alerts raised when a rule fires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule violation worth telling someone about.
///
/// The `Display` text is for humans and may change; the fields are what
/// identify the device, sensor and speed involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Alert {
    /// Static for too long since the last moving reading.
    SensitivityTooLow { device_id: String, elapsed_hours: f64 },

    /// Moving for too long since the last static reading.
    SensitivityTooHigh { device_id: String, elapsed_hours: f64 },

    HighPowerDraw {
        device_id: String,
        power_consumption: f64,
        maximum_power_consumption: f64,
    },

    /// Attributes a high power draw to motion seen by a sensor.
    MotionAttributed {
        device_id: String,
        sensor_id: String,
        speed: f64,
    },
}

impl Alert {
    pub fn device_id(&self) -> &str {
        match self {
            Self::SensitivityTooLow { device_id, .. }
            | Self::SensitivityTooHigh { device_id, .. }
            | Self::HighPowerDraw { device_id, .. }
            | Self::MotionAttributed { device_id, .. } => device_id,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensitivityTooLow {
                device_id,
                elapsed_hours,
            } => write!(
                f,
                "Sensitivity of device {device_id} may be too low: no motion for {elapsed_hours:.1} hours"
            ),
            Self::SensitivityTooHigh {
                device_id,
                elapsed_hours,
            } => write!(
                f,
                "Sensitivity of device {device_id} may be too high: moving for {elapsed_hours:.1} hours"
            ),
            Self::HighPowerDraw {
                device_id,
                power_consumption,
                maximum_power_consumption,
            } => write!(
                f,
                "Device {device_id} is drawing {power_consumption} against a maximum of {maximum_power_consumption}"
            ),
            Self::MotionAttributed {
                device_id,
                sensor_id,
                speed,
            } => write!(
                f,
                "High power draw on device {device_id} may be caused by motion on sensor {sensor_id} at speed {speed}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_identifying_fields() {
        let alert = Alert::MotionAttributed {
            device_id: "dev-9".to_string(),
            sensor_id: "pir-2".to_string(),
            speed: 5.0,
        };
        let text = alert.to_string();

        assert!(text.contains("dev-9"));
        assert!(text.contains("pir-2"));
        assert!(text.contains('5'));
    }

    #[test]
    fn device_id_is_available_for_every_kind() {
        let alerts = [
            Alert::SensitivityTooLow {
                device_id: "a".to_string(),
                elapsed_hours: 13.0,
            },
            Alert::SensitivityTooHigh {
                device_id: "a".to_string(),
                elapsed_hours: 13.0,
            },
            Alert::HighPowerDraw {
                device_id: "a".to_string(),
                power_consumption: 2.0,
                maximum_power_consumption: 1.0,
            },
            Alert::MotionAttributed {
                device_id: "a".to_string(),
                sensor_id: "s".to_string(),
                speed: 1.0,
            },
        ];

        for alert in &alerts {
            assert_eq!(alert.device_id(), "a");
        }
    }

    #[test]
    fn alert_serializes_with_kind_tag() {
        let alert = Alert::SensitivityTooLow {
            device_id: "dev-1".to_string(),
            elapsed_hours: 13.0,
        };
        let json = serde_json::to_value(&alert).unwrap();

        assert_eq!(json["kind"], "sensitivityTooLow");
        assert_eq!(json["deviceId"], "dev-1");
        assert_eq!(json["elapsedHours"], 13.0);
    }

    #[test]
    fn alert_fields_use_camel_case() {
        let alert = Alert::MotionAttributed {
            device_id: "d".to_string(),
            sensor_id: "s".to_string(),
            speed: 5.0,
        };
        let json = serde_json::to_value(&alert).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "motionAttributed",
                "deviceId": "d",
                "sensorId": "s",
                "speed": 5.0,
            })
        );
        assert_eq!(serde_json::from_value::<Alert>(json).unwrap(), alert);
    }
}
