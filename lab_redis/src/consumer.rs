//! # Redis Lab Consumer
//!
//! Reads new entries from the configured stream with bounded blocking reads
//! until the run deadline, decoding and logging each message payload.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lab_common::configs::config_env::RedisLabConfig;
use lab_common::connections::cache_redis::{decode_stream_message, CacheHandler};
use lab_common::loggers::logsetup::setup_logging;
use log::{error, info};
use tokio::time::Instant;

/// Upper bound for a single blocking read, so the deadline check runs at
/// least every two seconds even when the stream is idle.
const MAX_BLOCK_MS: usize = 2000;

/// Command-line arguments for the consumer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Reads messages from the Redis lab stream", long_about = None)]
struct Args {
    /// How long the read loop runs, in seconds.
    #[arg(short, long, default_value_t = 10)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("redis_consumer").context("Failed to setup logging")?;
    let args = Args::parse();
    let cfg = RedisLabConfig::from_env().context("consumer: can't parse env values")?;

    let mut cache = CacheHandler::connect(&cfg.redis_url)
        .await
        .context("consumer: can't create redis client instance")?;

    read_messages(
        &mut cache,
        &cfg.stream_name,
        Duration::from_secs(args.duration),
    )
    .await;
    Ok(())
}

/// Blocks on the stream for new entries until the deadline. Read and parse
/// errors are logged and the loop continues.
async fn read_messages(cache: &mut CacheHandler, stream: &str, duration: Duration) {
    let deadline = Instant::now() + duration;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        let block_ms = (remaining.as_millis() as usize).clamp(1, MAX_BLOCK_MS);
        match cache.read_stream_message(stream, block_ms).await {
            Ok(Some(raw)) => match decode_stream_message(&raw) {
                Ok(message) => info!("message: {}", message),
                Err(_) => error!("consumer: can't parse message"),
            },
            // Block timed out without entries.
            Ok(None) => {}
            Err(err) => error!("consumer: can't read message - {}", err),
        }
    }
}
