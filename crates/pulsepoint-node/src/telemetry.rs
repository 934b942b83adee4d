//! Wire format of the published sensor snapshot.
//!
//! One snapshot is assembled and serialized per acquisition tick. Key names
//! and value shapes are fixed by the downstream subscriber: a heart-rate
//! value is a one-decimal float, and the absence of a reliable reading is
//! the literal string `"No Reading"`, not `null`.

use pulsepoint_core::{AccelAxes, GpsFix};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Heart-rate field of the snapshot: a validated BPM value or the
/// "No Reading" marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeartRateField {
    /// A validated reading, already rounded to one decimal place.
    Reading(f64),
    /// No reliable reading this tick.
    NoReading,
}

impl From<Option<f64>> for HeartRateField {
    fn from(reading: Option<f64>) -> Self {
        match reading {
            Some(bpm) => Self::Reading(bpm),
            None => Self::NoReading,
        }
    }
}

impl Serialize for HeartRateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Reading(bpm) => serializer.serialize_f64(*bpm),
            Self::NoReading => serializer.serialize_str("No Reading"),
        }
    }
}

/// GPS block of the snapshot, rounded to six decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsBlock {
    latitude: f64,
    longitude: f64,
}

impl Serialize for GpsBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut block = serializer.serialize_struct("GPS", 2)?;
        block.serialize_field("Latitude", &self.latitude)?;
        block.serialize_field("Longitude", &self.longitude)?;
        block.end()
    }
}

/// One published telemetry snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SensorSnapshot {
    /// Potentiometer wiper level.
    #[serde(rename = "Potentiometer")]
    pub potentiometer: u16,
    /// Accelerometer axes in raw counts (0 on a bus fault).
    #[serde(rename = "Accelerometer")]
    pub accelerometer: AccelAxes,
    /// GPS position, 0.0/0.0 before the first fix.
    #[serde(rename = "GPS")]
    pub gps: GpsBlock,
    /// Heart rate or the "No Reading" marker.
    #[serde(rename = "Heart Rate")]
    pub heart_rate: HeartRateField,
}

impl SensorSnapshot {
    /// Assembles a snapshot from this tick's readings.
    pub fn new(
        potentiometer: u16,
        accelerometer: AccelAxes,
        fix: GpsFix,
        heart_rate: Option<f64>,
    ) -> Self {
        let rounded = fix.rounded();
        Self {
            potentiometer,
            accelerometer,
            gps: GpsBlock {
                latitude: rounded.latitude,
                longitude: rounded.longitude,
            },
            heart_rate: heart_rate.into(),
        }
    }
}
