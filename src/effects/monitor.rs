//! Monitor that runs rules against readings using its collaborators.

use crate::core::{sanitize_speed, validate_moving, MeterReading, MotionReading, MotionState};
use crate::effects::env::{AlertSink, HistoryLookup, Persistence};
use crate::effects::error::MonitorError;
use crate::enforcement::{Alert, RuleSet, SensitivityRule};

/// Evaluates readings against a [`RuleSet`].
///
/// The monitor keeps no state between calls. Each rule operation awaits a
/// single history lookup; `create_moving_motion` awaits a single store call.
pub struct MotionMonitor<H, P, A> {
    history: H,
    store: P,
    sink: A,
    rules: RuleSet,
}

impl<H, P, A> MotionMonitor<H, P, A>
where
    H: HistoryLookup,
    P: Persistence,
    A: AlertSink,
{
    /// Create a monitor with the default rules
    pub fn new(history: H, store: P, sink: A) -> Self {
        Self {
            history,
            store,
            sink,
            rules: RuleSet::default(),
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    /// Compare a reading with the device's last opposite-state record.
    ///
    /// A static reading is checked against the last moving record and may
    /// raise `SensitivityTooLow`; a moving reading is checked against the
    /// last static record and may raise `SensitivityTooHigh`. A fired alert
    /// is sent to the sink and returned. Lookup failures propagate.
    pub async fn sanity_check_sensitivity(
        &self,
        motion: &MotionReading,
    ) -> Result<Option<Alert>, MonitorError> {
        let baseline_state = SensitivityRule::baseline_state(motion);
        tracing::debug!(
            device_id = %motion.device_id,
            baseline = %baseline_state,
            "Fetching sensitivity baseline"
        );

        let baseline = match baseline_state {
            MotionState::Moving => self.history.last_moving_record(&motion.device_id).await?,
            MotionState::Static => self.history.last_static_record(&motion.device_id).await?,
        };

        let alert = self.rules.sensitivity().evaluate(motion, &baseline);
        if let Some(alert) = &alert {
            self.sink.alert(alert);
        }
        Ok(alert)
    }

    /// Alert when a moving device draws more than its rated maximum.
    ///
    /// Does nothing when consumption is within limits. Otherwise the motion
    /// reading must be moving; a validation failure is returned and no
    /// alert is sent.
    pub async fn notify_me_on_moving_high_consumption_device(
        &self,
        motion: &MotionReading,
        meter: &MeterReading,
    ) -> Result<Vec<Alert>, MonitorError> {
        let alerts = self.rules.overconsumption().evaluate(motion, meter)?;
        for alert in &alerts {
            self.sink.alert(alert);
        }
        Ok(alerts)
    }

    /// Validate, sanitize and persist a moving reading.
    ///
    /// Builds a new [`MovingReading`](crate::core::MovingReading) from
    /// `motion`; the caller's reading is never modified. Nothing reaches the store unless both validators pass.
    pub async fn create_moving_motion(
        &self,
        motion: &MotionReading,
    ) -> Result<P::Record, MonitorError> {
        let validated = validate_moving(motion)?;
        let speed = sanitize_speed(validated.speed());
        let record = validated.with_speed(speed);

        tracing::debug!(
            device_id = %record.device_id(),
            sensor_id = %record.sensor_id(),
            speed = %record.speed(),
            "Persisting moving reading"
        );
        Ok(self.store.create(record).await?)
    }
}
