//! Pulsepoint telemetry node
//!
//! Samples a PPG sensor, a potentiometer, a 3-axis accelerometer, and a GPS
//! receiver once per second, runs the heart-rate pipeline, and publishes a
//! JSON snapshot to an MQTT broker. Runs until ctrl-c.

use anyhow::bail;
use clap::Parser;
use tracing::info;

use pulsepoint_node::config::NodeConfig;
use pulsepoint_node::mqtt::{self, MqttPublisher};
use pulsepoint_node::node::{SensorNode, SensorSuite};

#[derive(Parser, Debug)]
#[command(name = "pulsepoint-node", about = "PPG sensor telemetry node")]
struct Args {
    /// MQTT broker hostname
    #[arg(long, default_value = "test.mosquitto.org")]
    broker: String,

    /// MQTT broker port
    #[arg(long, default_value = "1883")]
    port: u16,

    /// MQTT client identifier
    #[arg(long, default_value = "pulsepoint-node")]
    client_id: String,

    /// Topic to publish snapshots on
    #[arg(long, default_value = "FYP_sensor_data")]
    topic: String,

    /// Tick interval in milliseconds
    #[arg(long, default_value = "1000")]
    tick_ms: u64,

    /// Sensor source: sim
    #[arg(long, default_value = "sim")]
    source: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let config = NodeConfig::builder()
        .broker_host(args.broker)
        .broker_port(args.port)
        .client_id(args.client_id)
        .topic(args.topic)
        .tick_interval_ms(args.tick_ms)
        .build();

    let sensors = match args.source.as_str() {
        "sim" => SensorSuite::simulated(),
        other => bail!("unknown sensor source '{other}' (expected: sim)"),
    };

    info!(
        broker = %config.broker_host,
        port = config.broker_port,
        source = %args.source,
        "starting pulsepoint node"
    );

    let (publisher, event_loop) = MqttPublisher::connect(&config);
    tokio::spawn(mqtt::drive_event_loop(event_loop));

    let mut node = SensorNode::new(config, sensors, Box::new(publisher));

    tokio::select! {
        _ = node.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown requested");
        }
    }

    Ok(())
}
