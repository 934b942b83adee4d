//! Core data types for the pulsepoint telemetry node.
//!
//! This module defines the value objects that cross the boundary between
//! the sensor drivers, the heart-rate pipeline, and the publish loop.
//!
//! # Type Categories
//!
//! - **Signal Types**: [`Sample`] (one timestamped PPG intensity reading)
//! - **Sensor Types**: [`AccelAxes`], [`GpsFix`], [`Hemisphere`]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Signal Types
// =============================================================================

/// A single accepted PPG intensity reading.
///
/// Produced once per acquisition tick by signal ingest, after the no-contact
/// floor check. The timestamp is monotonic seconds with sub-second precision,
/// taken from the loop's [`MonotonicClock`](crate::traits::MonotonicClock).
/// Samples are not persisted beyond the detector's rolling window.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Raw infrared intensity from the PPG sensor.
    pub value: u32,
    /// Monotonic timestamp in seconds.
    pub timestamp: f64,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub fn new(value: u32, timestamp: f64) -> Self {
        Self { value, timestamp }
    }

    /// Returns the elapsed seconds since an earlier sample.
    #[must_use]
    pub fn seconds_since(&self, earlier: &Self) -> f64 {
        self.timestamp - earlier.timestamp
    }
}

// =============================================================================
// Sensor Types
// =============================================================================

/// One reading of the 3-axis accelerometer, in raw signed 16-bit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelAxes {
    /// X-axis acceleration (raw counts)
    pub x: i16,
    /// Y-axis acceleration (raw counts)
    pub y: i16,
    /// Z-axis acceleration (raw counts)
    pub z: i16,
}

impl AccelAxes {
    /// The sentinel reading substituted when the accelerometer bus faults.
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Creates a new axes reading.
    #[must_use]
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// Hemisphere indicator from a GPS fix.
///
/// Southern and western hemispheres negate the decimal-degree value when a
/// fix is converted for publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Northern hemisphere (positive latitude)
    North,
    /// Southern hemisphere (negative latitude)
    South,
    /// Eastern hemisphere (positive longitude)
    East,
    /// Western hemisphere (negative longitude)
    West,
}

impl Hemisphere {
    /// Returns the sign applied to decimal degrees in this hemisphere.
    #[must_use]
    pub fn sign(&self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// A GPS position in signed decimal degrees.
///
/// Before the receiver has a fix both coordinates are 0.0; the publish loop
/// forwards that as-is rather than treating it as a fault.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsFix {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub latitude: f64,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub longitude: f64,
}

impl GpsFix {
    /// The position reported before the receiver has acquired a fix.
    pub const NO_FIX: Self = Self {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Creates a fix directly from signed decimal degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds a fix from NMEA-style degrees + decimal minutes and hemisphere
    /// indicators.
    ///
    /// A zero degree component means "no fix yet" for that axis and yields
    /// 0.0 regardless of the minutes value.
    #[must_use]
    pub fn from_degrees_minutes(
        lat_deg: f64,
        lat_min: f64,
        lat_hemisphere: Hemisphere,
        lon_deg: f64,
        lon_min: f64,
        lon_hemisphere: Hemisphere,
    ) -> Self {
        let latitude = if lat_deg == 0.0 {
            0.0
        } else {
            (lat_deg + lat_min / 60.0) * lat_hemisphere.sign()
        };
        let longitude = if lon_deg == 0.0 {
            0.0
        } else {
            (lon_deg + lon_min / 60.0) * lon_hemisphere.sign()
        };
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` once at least one coordinate is non-zero.
    #[must_use]
    pub fn has_fix(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    /// Returns the fix rounded to six decimal places, the precision used on
    /// the wire.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            latitude: round_to_places(self.latitude, 6),
            longitude: round_to_places(self.longitude, 6),
        }
    }
}

/// Rounds a value to `places` decimal places.
#[must_use]
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_seconds_since() {
        let a = Sample::new(8000, 10.0);
        let b = Sample::new(8100, 11.5);
        assert!((b.seconds_since(&a) - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accel_sentinel() {
        assert_eq!(AccelAxes::ZERO, AccelAxes::new(0, 0, 0));
    }

    #[test]
    fn test_hemisphere_signing() {
        let fix = GpsFix::from_degrees_minutes(
            53.0,
            21.18,
            Hemisphere::South,
            6.0,
            15.58,
            Hemisphere::West,
        );
        assert!(fix.latitude < 0.0);
        assert!(fix.longitude < 0.0);
        assert!((fix.latitude + 53.353).abs() < 0.001);
        assert!((fix.longitude + 6.259_667).abs() < 0.001);
    }

    #[test]
    fn test_no_fix_when_degrees_zero() {
        let fix = GpsFix::from_degrees_minutes(
            0.0,
            59.0,
            Hemisphere::North,
            0.0,
            1.0,
            Hemisphere::East,
        );
        assert!(!fix.has_fix());
        assert_eq!(fix, GpsFix::NO_FIX);
    }

    #[test]
    fn test_rounding_to_six_places() {
        let fix = GpsFix::new(53.349_812_345_6, -6.260_309_876_5).rounded();
        assert_eq!(fix.latitude, 53.349_812);
        assert_eq!(fix.longitude, -6.260_31);
    }
}
