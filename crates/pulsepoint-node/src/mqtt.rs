//! MQTT-backed telemetry publisher.
//!
//! Thin adapter between the acquisition loop and `rumqttc`: publishes are
//! queued non-blocking at QoS 0, and a background task drives the client
//! event loop. Connection upkeep and re-subscription live entirely inside
//! `rumqttc`; the loop only ever sees a [`TransportError`] for a payload
//! that could not be queued.

use std::time::Duration;

use rumqttc::{AsyncClient, EventLoop, MqttOptions, QoS};
use tracing::{debug, warn};

use pulsepoint_core::{TelemetryPublisher, TransportError};

use crate::config::NodeConfig;

/// Capacity of the client's outbound request channel.
const REQUEST_CHANNEL_CAPACITY: usize = 16;

/// [`TelemetryPublisher`] backed by a `rumqttc` async client.
pub struct MqttPublisher {
    client: AsyncClient,
}

impl MqttPublisher {
    /// Creates the client for the configured broker.
    ///
    /// The returned [`EventLoop`] must be driven for anything to reach the
    /// wire; hand it to [`drive_event_loop`] on a spawned task.
    pub fn connect(config: &NodeConfig) -> (Self, EventLoop) {
        let mut options = MqttOptions::new(
            config.client_id.clone(),
            config.broker_host.clone(),
            config.broker_port,
        );
        options.set_keep_alive(Duration::from_secs(30));

        let (client, event_loop) = AsyncClient::new(options, REQUEST_CHANNEL_CAPACITY);
        (Self { client }, event_loop)
    }
}

impl TelemetryPublisher for MqttPublisher {
    fn publish(&mut self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError> {
        self.client
            .try_publish(topic, QoS::AtMostOnce, false, payload)
            .map_err(|e| TransportError::publish(topic, e.to_string()))
    }
}

/// Drives the client event loop until the process exits.
///
/// Poll errors cover both connect failures and mid-session drops; either
/// way the next poll retries, so a warn line per failure is all the loop
/// owes the operator.
pub async fn drive_event_loop(mut event_loop: EventLoop) {
    loop {
        match event_loop.poll().await {
            Ok(event) => debug!(?event, "mqtt event"),
            Err(e) => {
                warn!("mqtt connection error: {e}");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}
