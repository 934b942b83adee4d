//! Node configuration.

use std::time::Duration;

use pulsepoint_vitals::HeartRateConfig;

/// Configuration for the telemetry node.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// MQTT broker hostname.
    pub broker_host: String,
    /// MQTT broker port.
    pub broker_port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Topic the snapshots are published to.
    pub topic: String,
    /// Acquisition/publish tick interval in milliseconds.
    pub tick_interval_ms: u64,
    /// Heart-rate pipeline tuning.
    pub heart_rate: HeartRateConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            broker_host: "test.mosquitto.org".to_string(),
            broker_port: 1883,
            client_id: "pulsepoint-node".to_string(),
            topic: "FYP_sensor_data".to_string(),
            tick_interval_ms: 1_000,
            heart_rate: HeartRateConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Create a new configuration builder
    pub fn builder() -> NodeConfigBuilder {
        NodeConfigBuilder::default()
    }

    /// The tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Builder for [`NodeConfig`]
#[derive(Debug, Default)]
pub struct NodeConfigBuilder {
    config: NodeConfig,
}

impl NodeConfigBuilder {
    /// Set the broker hostname
    pub fn broker_host(mut self, host: impl Into<String>) -> Self {
        self.config.broker_host = host.into();
        self
    }

    /// Set the broker port
    pub fn broker_port(mut self, port: u16) -> Self {
        self.config.broker_port = port;
        self
    }

    /// Set the MQTT client identifier
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.config.client_id = id.into();
        self
    }

    /// Set the publish topic
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.config.topic = topic.into();
        self
    }

    /// Set the tick interval, clamped to at least 100 ms
    pub fn tick_interval_ms(mut self, interval: u64) -> Self {
        self.config.tick_interval_ms = interval.max(100);
        self
    }

    /// Set the heart-rate pipeline tuning
    pub fn heart_rate(mut self, heart_rate: HeartRateConfig) -> Self {
        self.config.heart_rate = heart_rate;
        self
    }

    /// Build the configuration
    pub fn build(self) -> NodeConfig {
        self.config
    }
}
