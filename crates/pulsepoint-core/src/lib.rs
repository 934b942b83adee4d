//! # Pulsepoint Core
//!
//! Core types, traits, and utilities for the pulsepoint sensor telemetry node.
//!
//! This crate provides the foundational building blocks used throughout the
//! pulsepoint workspace, including:
//!
//! - **Core Data Types**: [`Sample`], [`AccelAxes`], and [`GpsFix`] for
//!   representing sensor readings on their way to the publish loop.
//!
//! - **Error Types**: The fault taxonomy via the [`error`] module. Sensor
//!   and transport faults are always recoverable; validation rejections
//!   (insufficient history, implausible rate) are modelled as `Option`
//!   returns, never as errors.
//!
//! - **Traits**: Boundary abstractions like [`PpgSensor`], [`GpsReceiver`],
//!   and [`TelemetryPublisher`] that define the contracts between the
//!   acquisition loop and its external collaborators.
//!
//! ## Example
//!
//! ```rust
//! use pulsepoint_core::{GpsFix, Hemisphere};
//!
//! let fix = GpsFix::from_degrees_minutes(53.0, 21.18, Hemisphere::North,
//!                                        6.0, 15.58, Hemisphere::West);
//! assert!(fix.has_fix());
//! assert!(fix.longitude < 0.0);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types at the crate root
pub use error::{NodeError, NodeResult, SensorError, TransportError};
pub use traits::{
    Accelerometer, GpsReceiver, InstantClock, MonotonicClock, Potentiometer, PpgSensor,
    TelemetryPublisher,
};
pub use types::{AccelAxes, GpsFix, Hemisphere, Sample};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
///
/// ```rust
/// use pulsepoint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{NodeError, NodeResult, SensorError, TransportError};
    pub use crate::traits::{
        Accelerometer, GpsReceiver, InstantClock, MonotonicClock, Potentiometer, PpgSensor,
        TelemetryPublisher,
    };
    pub use crate::types::{AccelAxes, GpsFix, Hemisphere, Sample};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_valid() {
        assert!(!VERSION.is_empty());
    }
}
