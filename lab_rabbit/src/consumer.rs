//! # Rabbit Lab Consumer
//!
//! Consumes the durable test queue with auto-ack until the run deadline.
//! Each delivery is parsed as an integer; values greater than the accepted
//! limit are rejected with an error log line.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use futures_util::StreamExt;
use lab_common::configs::config_env::RabbitLabConfig;
use lab_common::connections::queue_rabbit::{within_limit, QueueHandler, QUEUE_NAME};
use lab_common::loggers::logsetup::setup_logging;
use log::{error, info};
use tokio::time::{sleep_until, Instant};

/// Command-line arguments for the consumer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Consumes and validates integers from the RabbitMQ test queue", long_about = None)]
struct Args {
    /// How long the consume loop runs, in seconds.
    #[arg(short, long, default_value_t = 60)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("rabbit_consumer").context("Failed to setup logging")?;
    let args = Args::parse();
    let cfg = RabbitLabConfig::from_env().context("consumer: can't parse env values")?;

    let queue = QueueHandler::connect(&cfg.rabbit_url, QUEUE_NAME)
        .await
        .context("rabbit: connection failed")?;
    let mut consumer = queue
        .consume("")
        .await
        .context("rabbit: error while reading from queue")?;

    let deadline = sleep_until(Instant::now() + Duration::from_secs(args.duration));
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => return Ok(()),
            delivery = consumer.next() => {
                match delivery {
                    Some(Ok(delivery)) => handle_body(&delivery.data),
                    Some(Err(err)) => error!("rabbit: delivery error - {}", err),
                    // Channel closed by the broker; nothing more to consume.
                    None => return Ok(()),
                }
            }
        }
    }
}

/// Parses and validates one delivery body.
fn handle_body(body: &[u8]) {
    let Some(value) = parse_value(body) else {
        error!("rabbit: error while parsing message");
        return;
    };
    if !within_limit(value) {
        error!("rabbit: invalid value from queue");
        return;
    }
    info!("message from queue: {}", value);
}

/// Decodes a delivery body into an integer, if it is one.
fn parse_value(body: &[u8]) -> Option<i64> {
    std::str::from_utf8(body).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_json_integer_body() {
        assert_eq!(parse_value(b"7"), Some(7));
        assert_eq!(parse_value(b"14"), Some(14));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert_eq!(parse_value(b"seven"), None);
        assert_eq!(parse_value(&[0xff, 0xfe]), None);
    }
}
