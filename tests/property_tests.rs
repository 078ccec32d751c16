//! Property-based tests for classifiers, validators and rules.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use motionguard::core::{
    assert_not_zero_or_negative, elapsed_hours, is_power_consumption_high, is_static,
    sanitize_speed, validate_moving, HistoricalRecord, MeterReading, Motion, MotionReading,
    MotionState, Sensitivity, Speed, ValidationError,
};
use motionguard::enforcement::{Alert, OverconsumptionRule, SensitivityRule};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

prop_compose! {
    fn arbitrary_sensitivity()(variant in 0..3u8) -> Sensitivity {
        match variant {
            0 => Sensitivity::Low,
            1 => Sensitivity::Medium,
            _ => Sensitivity::High,
        }
    }
}

prop_compose! {
    fn arbitrary_motion()(
        moving in any::<bool>(),
        speed in proptest::option::of(any::<f64>()),
    ) -> Motion {
        if moving {
            Motion::Moving { speed }
        } else {
            Motion::Static
        }
    }
}

prop_compose! {
    fn arbitrary_reading()(
        sensor in "[a-z]{1,8}",
        device in "[a-z]{1,8}",
        offset_secs in -1_000_000i64..1_000_000,
        sensitivity in arbitrary_sensitivity(),
        motion in arbitrary_motion(),
    ) -> MotionReading {
        MotionReading {
            sensor_id: sensor,
            device_id: device,
            timestamp: epoch() + Duration::seconds(offset_secs),
            sensitivity,
            motion,
        }
    }
}

proptest! {
    #[test]
    fn is_static_matches_variant(reading in arbitrary_reading()) {
        let expected = matches!(reading.motion, Motion::Static);
        prop_assert_eq!(is_static(&reading), expected);
        prop_assert_eq!(reading.state() == MotionState::Static, expected);
    }

    #[test]
    fn power_consumption_high_is_strict_comparison(
        consumption in -1e6f64..1e6,
        maximum in -1e6f64..1e6,
    ) {
        let meter = MeterReading::new("m", "d", consumption, maximum);
        prop_assert_eq!(is_power_consumption_high(&meter), consumption > maximum);

        let equal = MeterReading::new("m", "d", maximum, maximum);
        prop_assert!(!is_power_consumption_high(&equal));
    }

    #[test]
    fn positive_finite_values_are_accepted(value in f64::MIN_POSITIVE..f64::MAX) {
        let speed = assert_not_zero_or_negative(Some(value)).unwrap();
        prop_assert_eq!(speed.get(), value);
        prop_assert_eq!(sanitize_speed(speed), speed);
    }

    #[test]
    fn non_positive_values_are_not_positive(value in -f64::MAX..=0.0f64) {
        prop_assert_eq!(
            assert_not_zero_or_negative(Some(value)),
            Err(ValidationError::NotPositive { value })
        );
    }

    #[test]
    fn validate_moving_agrees_with_speed(reading in arbitrary_reading()) {
        match validate_moving(&reading) {
            Ok(moving) => {
                prop_assert_eq!(reading.state(), MotionState::Moving);
                prop_assert_eq!(Some(moving.speed().get()), reading.speed());
                prop_assert!(Speed::new(moving.speed().get()).is_ok());
            }
            Err(ValidationError::WrongState { .. }) => {
                prop_assert!(is_static(&reading));
            }
            Err(_) => {
                let rejected = match reading.speed() {
                    Some(s) => !(s.is_finite() && s > 0.0),
                    None => true,
                };
                prop_assert!(rejected);
            }
        }
    }

    #[test]
    fn validate_moving_never_mutates_input(reading in arbitrary_reading()) {
        let snapshot = serde_json::to_string(&reading).unwrap();
        let _ = validate_moving(&reading);
        prop_assert_eq!(serde_json::to_string(&reading).unwrap(), snapshot);
    }

    #[test]
    fn sensitivity_fires_only_past_threshold(
        reading in arbitrary_reading(),
        baseline_offset_secs in -1_000_000i64..1_000_000,
    ) {
        let baseline = HistoricalRecord {
            device_id: reading.device_id.clone(),
            state: SensitivityRule::baseline_state(&reading),
            timestamp: epoch() + Duration::seconds(baseline_offset_secs),
        };
        let diff = elapsed_hours(baseline.timestamp, reading.timestamp);

        let alert = SensitivityRule::default().evaluate(&reading, &baseline);

        match alert {
            None => prop_assert!(diff <= 12.0),
            Some(Alert::SensitivityTooLow { .. }) => {
                prop_assert!(diff > 12.0);
                prop_assert!(is_static(&reading));
            }
            Some(Alert::SensitivityTooHigh { .. }) => {
                prop_assert!(diff > 12.0);
                prop_assert!(!is_static(&reading));
            }
            Some(other) => prop_assert!(false, "unexpected alert {:?}", other),
        }
    }

    #[test]
    fn overconsumption_is_silent_within_limits(
        reading in arbitrary_reading(),
        maximum in 0.0f64..1e6,
        fraction in 0.0f64..=1.0,
    ) {
        let meter = MeterReading::new("m", "d", maximum * fraction, maximum);
        let alerts = OverconsumptionRule.evaluate(&reading, &meter);
        prop_assert!(matches!(alerts, Ok(ref fired) if fired.is_empty()));
    }
}
