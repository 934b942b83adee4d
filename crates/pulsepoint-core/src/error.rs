//! Error types for the pulsepoint telemetry node.
//!
//! This module provides the node's fault taxonomy using [`thiserror`] for
//! automatic `Display` and `Error` trait implementations.
//!
//! # Error Hierarchy
//!
//! - [`NodeError`]: Top-level error type wrapping all subsystem errors
//! - [`SensorError`]: Faults on the sensor bus boundary
//! - [`TransportError`]: Faults on the broker/publish boundary
//!
//! Validation outcomes -- insufficient history, a peak-to-peak gap outside
//! the detection window, a rate outside the plausible band -- are NOT
//! errors. They are defined "no reading" results and surface as `None`
//! from the pipeline, never through these types.
//!
//! # Example
//!
//! ```rust
//! use pulsepoint_core::error::{NodeError, SensorError};
//!
//! fn read_axis() -> Result<i16, NodeError> {
//!     Err(SensorError::bus("accelerometer", "i2c read timed out").into())
//! }
//! ```

use thiserror::Error;

/// A specialized `Result` type for node operations.
pub type NodeResult<T> = Result<T, NodeError>;

/// Top-level error type for the telemetry node.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NodeError {
    /// Sensor boundary fault
    #[error("Sensor fault: {0}")]
    Sensor(#[from] SensorError),

    /// Broker/publish boundary fault
    #[error("Transport fault: {0}")]
    Transport(#[from] TransportError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },
}

impl NodeError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Sensor and transport faults are always recovered in the acquisition
    /// loop (sentinel substitution, skipped publish); only a configuration
    /// error is fatal, and only at startup.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Sensor(e) => e.is_recoverable(),
            Self::Transport(e) => e.is_recoverable(),
            Self::Configuration { .. } => false,
        }
    }
}

/// Faults raised by sensor drivers.
///
/// A PPG reading below the no-contact floor is NOT a fault; it is a defined
/// "finger off sensor" outcome handled by signal ingest.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SensorError {
    /// Bus-level read failure (I2C/UART/ADC)
    #[error("{sensor}: bus read failed: {message}")]
    Bus {
        /// Which sensor faulted
        sensor: &'static str,
        /// Driver-level description
        message: String,
    },

    /// A register read returned a value outside the representable range
    #[error("{sensor}: value {value} outside [{min}, {max}]")]
    OutOfRange {
        /// Which sensor faulted
        sensor: &'static str,
        /// The offending value
        value: i64,
        /// Minimum representable value
        min: i64,
        /// Maximum representable value
        max: i64,
    },

    /// The device has not finished powering up or has no data ready
    #[error("{sensor}: not ready")]
    NotReady {
        /// Which sensor faulted
        sensor: &'static str,
    },
}

impl SensorError {
    /// Creates a new bus fault.
    #[must_use]
    pub fn bus(sensor: &'static str, message: impl Into<String>) -> Self {
        Self::Bus {
            sensor,
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// All sensor faults are: the loop substitutes a sentinel reading and
    /// continues on the next tick.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        true
    }
}

/// Faults raised on the broker boundary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    /// Initial connection to the broker failed
    #[error("connect to {broker} failed: {message}")]
    Connect {
        /// Broker address
        broker: String,
        /// Client-level description
        message: String,
    },

    /// A publish was not accepted by the client
    #[error("publish to '{topic}' failed: {message}")]
    Publish {
        /// Destination topic
        topic: String,
        /// Client-level description
        message: String,
    },

    /// The client's event loop has shut down
    #[error("transport disconnected")]
    Disconnected,
}

impl TransportError {
    /// Creates a new publish fault.
    #[must_use]
    pub fn publish(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Publish {
            topic: topic.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Publish faults are logged and the data point is dropped; there is no
    /// retry queue, the loop simply tries again next tick.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        true
    }
}
