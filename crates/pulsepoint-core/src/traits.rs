//! Boundary trait definitions for the pulsepoint telemetry node.
//!
//! This module defines the contracts between the acquisition loop and its
//! external collaborators, enabling a modular and testable node.
//!
//! # Traits
//!
//! - [`PpgSensor`], [`Accelerometer`], [`Potentiometer`], [`GpsReceiver`]:
//!   the sensor bus boundary. Register-level access lives behind these
//!   traits; the loop only sees readings or [`SensorError`]s.
//! - [`MonotonicClock`]: the time source stamped onto accepted samples
//! - [`TelemetryPublisher`]: the broker boundary
//!
//! # Design Philosophy
//!
//! 1. **Single Responsibility**: each trait covers one device
//! 2. **Testability**: every trait is trivially mocked in loop tests
//! 3. **Error Handling**: bus faults are `Err`, defined no-data outcomes
//!    (no finger contact, no GPS fix yet) are ordinary values

use crate::error::{SensorError, TransportError};
use crate::types::{AccelAxes, GpsFix};

/// Driver for the photoplethysmography (PPG) sensor.
///
/// The raw intensity is an unsigned infrared absorption count. Readings
/// below the no-contact floor are valid values, not faults; the heart-rate
/// pipeline's ingest stage rejects them.
pub trait PpgSensor: Send {
    /// Reads one raw infrared intensity value.
    ///
    /// # Errors
    ///
    /// Returns a [`SensorError`] on a transient bus fault.
    fn read_raw_intensity(&mut self) -> Result<u32, SensorError>;
}

/// Driver for the 3-axis accelerometer.
pub trait Accelerometer: Send {
    /// Reads all three axes as raw signed 16-bit counts.
    ///
    /// # Errors
    ///
    /// Returns a [`SensorError`] on a transient bus fault; the loop
    /// substitutes [`AccelAxes::ZERO`].
    fn read_axes(&mut self) -> Result<AccelAxes, SensorError>;
}

/// Driver for the potentiometer on the ADC.
pub trait Potentiometer: Send {
    /// Reads the current wiper level as an unsigned 16-bit value.
    ///
    /// # Errors
    ///
    /// Returns a [`SensorError`] on a transient bus fault.
    fn read_level(&mut self) -> Result<u16, SensorError>;
}

/// Driver for the GPS receiver.
///
/// Implementations accumulate NMEA state internally; `read_fix` reports the
/// best current position, which is [`GpsFix::NO_FIX`] until the receiver
/// has acquired satellites.
pub trait GpsReceiver: Send {
    /// Returns the current position in signed decimal degrees.
    ///
    /// # Errors
    ///
    /// Returns a [`SensorError`] on a transient bus fault.
    fn read_fix(&mut self) -> Result<GpsFix, SensorError>;
}

/// Monotonic time source, in seconds with sub-second precision.
///
/// Timestamps from this clock order the samples fed to the peak detector;
/// they are never compared against wall-clock time.
pub trait MonotonicClock: Send {
    /// Seconds elapsed since an arbitrary fixed origin.
    fn now_secs(&self) -> f64;
}

/// [`MonotonicClock`] backed by [`std::time::Instant`].
#[derive(Debug)]
pub struct InstantClock {
    origin: std::time::Instant,
}

impl InstantClock {
    /// Creates a clock whose origin is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for InstantClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Outbound boundary to the message broker.
///
/// Implementations hand the payload to their transport without blocking the
/// acquisition loop; delivery is fire-and-forget. A failed publish is
/// reported as a [`TransportError`], logged by the loop, and the data point
/// is dropped -- there is no retry queue.
pub trait TelemetryPublisher: Send {
    /// Queues one serialized snapshot for publication on `topic`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the payload could not be handed to
    /// the transport.
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_clock_monotonic() {
        let clock = InstantClock::new();
        let a = clock.now_secs();
        let b = clock.now_secs();
        assert!(b >= a);
    }

    #[test]
    fn test_instant_clock_starts_near_zero() {
        let clock = InstantClock::new();
        assert!(clock.now_secs() < 1.0);
    }
}
