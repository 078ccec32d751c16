//! Sensor Rules
//!
//! This example runs both rules against a small in-memory history and
//! reports alerts through `tracing`.
//!
//! Key concepts:
//! - Narrowing an untrusted reading into a validated one
//! - Loading rule configuration
//! - Swapping collaborators behind capability traits
//!
//! Run with: RUST_LOG=debug cargo run --example sensor_rules

use chrono::{Duration, Utc};
use motionguard::core::{DeviceHistory, HistoricalRecord, MotionState};
use motionguard::effects::memory::{InMemoryHistory, InMemoryStore};
use motionguard::effects::TracingSink;
use motionguard::enforcement::{RuleConfig, RulesBuilder};
use motionguard::ingest::{parse_meter_reading, parse_motion_reading};
use motionguard::MotionMonitor;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Sensor Rules Example ===\n");

    let now = Utc::now();
    let history = DeviceHistory::new().record(HistoricalRecord {
        device_id: "pump-7".to_string(),
        state: MotionState::Moving,
        timestamp: now - Duration::hours(20),
    });

    let config = RuleConfig::from_json(r#"{ "sensitivityThresholdHours": 12 }"#)?;
    let rules = RulesBuilder::from_config(&config).build()?;
    let monitor = MotionMonitor::new(
        InMemoryHistory::new(history),
        InMemoryStore::new(),
        TracingSink,
    )
    .with_rules(rules);

    // Example 1: a static reading long after the last motion
    println!("Example 1: Sensitivity check");
    let still = parse_motion_reading(&format!(
        r#"{{
            "sensorId": "pir-2",
            "deviceId": "pump-7",
            "timestamp": "{}",
            "sensitivity": "low",
            "state": "static"
        }}"#,
        now.to_rfc3339()
    ))?;
    match monitor.sanity_check_sensitivity(&still).await? {
        Some(alert) => println!("  Alert: {alert}\n"),
        None => println!("  No alert\n"),
    }

    // Example 2: high consumption while moving
    println!("Example 2: Overconsumption check");
    let moving = parse_motion_reading(&format!(
        r#"{{
            "sensorId": "pir-2",
            "deviceId": "pump-7",
            "timestamp": "{}",
            "sensitivity": "low",
            "state": "moving",
            "speed": 5
        }}"#,
        now.to_rfc3339()
    ))?;
    let meter = parse_meter_reading(
        r#"{
            "sensorId": "meter-3",
            "deviceId": "pump-7",
            "powerConsumption": 100,
            "maximumPowerConsumption": 50
        }"#,
    )?;
    let alerts = monitor
        .notify_me_on_moving_high_consumption_device(&moving, &meter)
        .await?;
    println!("  {} alert(s) raised\n", alerts.len());

    // Example 3: persisting a validated reading
    println!("Example 3: Persisting a moving reading");
    let persisted = monitor.create_moving_motion(&moving).await?;
    println!("  Stored {} at speed {}\n", persisted.id, persisted.motion.speed());

    // Example 4: rejection of a stalled sensor
    println!("Example 4: Validation failure");
    let stalled = parse_motion_reading(&format!(
        r#"{{
            "sensorId": "pir-2",
            "deviceId": "pump-7",
            "timestamp": "{}",
            "sensitivity": "low",
            "state": "moving",
            "speed": 0
        }}"#,
        now.to_rfc3339()
    ))?;
    if let Err(err) = monitor.create_moving_motion(&stalled).await {
        println!("  Rejected: {err}\n");
    }

    println!("=== Example Complete ===");
    Ok(())
}
