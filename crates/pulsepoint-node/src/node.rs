//! The acquisition and publish loop.
//!
//! Single-threaded, single-writer: one tick pulls one reading from each
//! sensor, threads the PPG sample through the heart-rate pipeline, then
//! assembles and publishes the snapshot. Sensor faults are recovered with
//! sentinel readings; publish faults are logged and the data point is
//! dropped. Nothing here is fatal -- the loop runs until the process is
//! stopped.

use tracing::{debug, info, warn};

use pulsepoint_core::{
    AccelAxes, Accelerometer, GpsFix, GpsReceiver, InstantClock, MonotonicClock, Potentiometer,
    PpgSensor, TelemetryPublisher,
};
use pulsepoint_vitals::HeartRateMonitor;

use crate::config::NodeConfig;
use crate::sim::{SimulatedAccelerometer, SimulatedGps, SimulatedPotentiometer, SimulatedPpg};
use crate::telemetry::SensorSnapshot;

/// The node's sensor complement, behind the boundary traits.
pub struct SensorSuite {
    /// PPG sensor feeding the heart-rate pipeline.
    pub ppg: Box<dyn PpgSensor>,
    /// 3-axis accelerometer.
    pub accelerometer: Box<dyn Accelerometer>,
    /// Potentiometer on the ADC.
    pub potentiometer: Box<dyn Potentiometer>,
    /// GPS receiver.
    pub gps: Box<dyn GpsReceiver>,
}

impl SensorSuite {
    /// The simulated suite used for desk runs and demos.
    pub fn simulated() -> Self {
        Self {
            ppg: Box::new(SimulatedPpg::default()),
            accelerometer: Box::new(SimulatedAccelerometer::default()),
            potentiometer: Box::new(SimulatedPotentiometer::default()),
            gps: Box::new(SimulatedGps::default()),
        }
    }
}

/// The telemetry node: sensors in, JSON snapshots out.
pub struct SensorNode {
    config: NodeConfig,
    monitor: HeartRateMonitor,
    clock: Box<dyn MonotonicClock>,
    sensors: SensorSuite,
    publisher: Box<dyn TelemetryPublisher>,
    /// Most recent GPS position; held across read faults so a glitching
    /// receiver does not yank the position back to 0/0.
    last_fix: GpsFix,
    tick_count: u64,
}

impl SensorNode {
    /// Creates a node with empty pipeline state.
    pub fn new(
        config: NodeConfig,
        sensors: SensorSuite,
        publisher: Box<dyn TelemetryPublisher>,
    ) -> Self {
        let monitor = HeartRateMonitor::new(config.heart_rate.clone());
        Self {
            config,
            monitor,
            clock: Box::new(InstantClock::new()),
            sensors,
            publisher,
            last_fix: GpsFix::NO_FIX,
            tick_count: 0,
        }
    }

    /// Replaces the monotonic clock. Tests use this to pin timestamps.
    pub fn with_clock(mut self, clock: Box<dyn MonotonicClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the acquisition loop until the task is dropped.
    pub async fn run(&mut self) {
        let mut interval = tokio::time::interval(self.config.tick_interval());
        info!(
            topic = %self.config.topic,
            tick_ms = self.config.tick_interval_ms,
            "acquisition loop started"
        );
        loop {
            interval.tick().await;
            self.tick();
        }
    }

    /// One acquisition + publish cycle. Returns the snapshot for
    /// inspection; the caller normally ignores it.
    pub fn tick(&mut self) -> SensorSnapshot {
        self.tick_count += 1;

        let heart_rate = match self.sensors.ppg.read_raw_intensity() {
            Ok(raw) => self.monitor.process_reading(raw, self.clock.now_secs()),
            Err(e) => {
                warn!("ppg read failed: {e}");
                None
            }
        };

        let axes = self.sensors.accelerometer.read_axes().unwrap_or_else(|e| {
            warn!("accelerometer read failed: {e}");
            AccelAxes::ZERO
        });

        let potentiometer = self.sensors.potentiometer.read_level().unwrap_or_else(|e| {
            warn!("potentiometer read failed: {e}");
            0
        });

        match self.sensors.gps.read_fix() {
            Ok(fix) => self.last_fix = fix,
            Err(e) => warn!("gps read failed: {e}"),
        }

        let snapshot = SensorSnapshot::new(potentiometer, axes, self.last_fix, heart_rate);
        self.publish(&snapshot);
        snapshot
    }

    /// Serializes and queues the snapshot; a failed publish costs only this
    /// data point.
    fn publish(&mut self, snapshot: &SensorSnapshot) {
        let payload = match serde_json::to_vec(snapshot) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("snapshot serialization failed: {e}");
                return;
            }
        };

        match self.publisher.publish(&self.config.topic, payload) {
            Ok(()) => debug!(tick = self.tick_count, "snapshot published"),
            Err(e) => warn!(tick = self.tick_count, "publish failed: {e}"),
        }
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The heart-rate pipeline, for diagnostics.
    pub fn monitor(&self) -> &HeartRateMonitor {
        &self.monitor
    }
}
