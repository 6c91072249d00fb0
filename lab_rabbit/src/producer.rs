//! # Rabbit Lab Producer
//!
//! Publishes random integers in `0..15` to the durable test queue as fast as
//! the broker accepts them, until the run deadline.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lab_common::configs::config_env::RabbitLabConfig;
use lab_common::connections::queue_rabbit::{QueueHandler, QUEUE_NAME};
use lab_common::loggers::logsetup::setup_logging;
use log::error;
use rand::Rng;
use tokio::time::Instant;

/// Command-line arguments for the producer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Publishes random integers to the RabbitMQ test queue", long_about = None)]
struct Args {
    /// How long the publish loop runs, in seconds.
    #[arg(short, long, default_value_t = 1)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("rabbit_producer").context("Failed to setup logging")?;
    let args = Args::parse();
    let cfg = RabbitLabConfig::from_env().context("producer: can't parse env values")?;

    let queue = QueueHandler::connect(&cfg.rabbit_url, QUEUE_NAME)
        .await
        .context("rabbit: connection failed")?;

    let deadline = Instant::now() + Duration::from_secs(args.duration);
    while Instant::now() < deadline {
        let value: i64 = rand::rng().random_range(0..15);
        if let Err(err) = queue.publish_int(value).await {
            error!("producer: can't publish message - {}", err);
        }
    }
    Ok(())
}
