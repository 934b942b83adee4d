//! Simulated sensor suite.
//!
//! Deterministic sin-based waveforms standing in for the real hardware so
//! the node can run end-to-end on a desk. Each driver advances its own
//! phase on every read; no randomness is involved, so a given tick count
//! always produces the same snapshot.

use std::f64::consts::PI;

use pulsepoint_core::{
    AccelAxes, Accelerometer, GpsFix, GpsReceiver, Potentiometer, PpgSensor, SensorError,
};

/// Simulated PPG sensor producing a clean pulse waveform.
///
/// The waveform sits well above the no-contact floor and crests once per
/// `period_s`, so the heart-rate pipeline locks on after a few beats.
#[derive(Debug)]
pub struct SimulatedPpg {
    tick: u64,
    /// Seconds of waveform advanced per read.
    step_s: f64,
    /// Pulse period in seconds.
    period_s: f64,
}

impl SimulatedPpg {
    /// Creates a simulated sensor beating every `period_s` seconds,
    /// advanced `step_s` seconds per read.
    pub fn new(period_s: f64, step_s: f64) -> Self {
        Self {
            tick: 0,
            step_s,
            period_s,
        }
    }
}

impl Default for SimulatedPpg {
    fn default() -> Self {
        // 1.0 s beats sampled by the 1 Hz loop would alias; sample the
        // waveform 50x faster than the beat so peaks resolve cleanly.
        Self::new(1.0, 0.02)
    }
}

impl PpgSensor for SimulatedPpg {
    fn read_raw_intensity(&mut self) -> Result<u32, SensorError> {
        let t = self.tick as f64 * self.step_s;
        self.tick += 1;
        let phase = 2.0 * PI * t / self.period_s;
        Ok((10_000.0 + 2_000.0 * phase.sin()) as u32)
    }
}

/// Simulated accelerometer: slow tilt drift plus a small wobble.
#[derive(Debug, Default)]
pub struct SimulatedAccelerometer {
    tick: u64,
}

impl Accelerometer for SimulatedAccelerometer {
    fn read_axes(&mut self) -> Result<AccelAxes, SensorError> {
        let t = self.tick as f64;
        self.tick += 1;
        let x = (900.0 * (t * 0.05).sin() + 120.0 * (t * 0.7).sin()) as i16;
        let y = (650.0 * (t * 0.04).cos() + 90.0 * (t * 0.9).sin()) as i16;
        // Resting flat: z holds near 1 g in raw counts.
        let z = (16_000.0 + 300.0 * (t * 0.08).sin()) as i16;
        Ok(AccelAxes::new(x, y, z))
    }
}

/// Simulated potentiometer sweeping slowly across its range.
#[derive(Debug, Default)]
pub struct SimulatedPotentiometer {
    tick: u64,
}

impl Potentiometer for SimulatedPotentiometer {
    fn read_level(&mut self) -> Result<u16, SensorError> {
        let t = self.tick as f64;
        self.tick += 1;
        Ok((32_768.0 + 20_000.0 * (t * 0.02).sin()) as u16)
    }
}

/// Simulated GPS receiver: a fixed position with a small walking drift.
///
/// Reports no fix for the first few reads, mirroring a cold receiver.
#[derive(Debug)]
pub struct SimulatedGps {
    tick: u64,
    base_latitude: f64,
    base_longitude: f64,
    /// Reads to swallow before the first fix is available.
    warmup_reads: u64,
}

impl SimulatedGps {
    /// Creates a receiver centred on the given position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            tick: 0,
            base_latitude: latitude,
            base_longitude: longitude,
            warmup_reads: 5,
        }
    }
}

impl Default for SimulatedGps {
    fn default() -> Self {
        Self::new(53.349_805, -6.260_310)
    }
}

impl GpsReceiver for SimulatedGps {
    fn read_fix(&mut self) -> Result<GpsFix, SensorError> {
        let t = self.tick as f64;
        self.tick += 1;
        if self.tick <= self.warmup_reads {
            return Ok(GpsFix::NO_FIX);
        }
        // ~10 m of wander at walking pace.
        let latitude = self.base_latitude + 0.000_09 * (t * 0.01).sin();
        let longitude = self.base_longitude + 0.000_09 * (t * 0.013).cos();
        Ok(GpsFix::new(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppg_stays_above_contact_floor() {
        let mut ppg = SimulatedPpg::default();
        for _ in 0..500 {
            let value = ppg.read_raw_intensity().unwrap();
            assert!(value >= 5_000, "simulated wave dipped to {value}");
        }
    }

    #[test]
    fn test_ppg_is_deterministic() {
        let mut a = SimulatedPpg::default();
        let mut b = SimulatedPpg::default();
        for _ in 0..100 {
            assert_eq!(
                a.read_raw_intensity().unwrap(),
                b.read_raw_intensity().unwrap()
            );
        }
    }

    #[test]
    fn test_gps_cold_start_then_fix() {
        let mut gps = SimulatedGps::default();
        for _ in 0..5 {
            assert!(!gps.read_fix().unwrap().has_fix());
        }
        let fix = gps.read_fix().unwrap();
        assert!(fix.has_fix());
        assert!((fix.latitude - 53.35).abs() < 0.01);
        assert!((fix.longitude + 6.26).abs() < 0.01);
    }

    #[test]
    fn test_accelerometer_z_dominates_at_rest() {
        let mut accel = SimulatedAccelerometer::default();
        let axes = accel.read_axes().unwrap();
        assert!(axes.z > axes.x.abs());
        assert!(axes.z > axes.y.abs());
    }
}
