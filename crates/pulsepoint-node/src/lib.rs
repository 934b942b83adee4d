//! Pulsepoint telemetry node library.
//!
//! Wires the heart-rate pipeline from `pulsepoint-vitals` into a 1 Hz
//! acquisition loop that also samples a potentiometer, a 3-axis
//! accelerometer, and a GPS receiver, then publishes one JSON snapshot per
//! tick to an MQTT broker.
//!
//! The binary in `main.rs` assembles a [`SensorNode`] from CLI arguments;
//! everything here is also usable programmatically with mock sensors and
//! publishers, which is how the loop tests run.

#![forbid(unsafe_code)]

pub mod config;
pub mod mqtt;
pub mod node;
pub mod sim;
pub mod telemetry;

pub use config::NodeConfig;
pub use mqtt::MqttPublisher;
pub use node::{SensorNode, SensorSuite};
pub use telemetry::{HeartRateField, SensorSnapshot};
