//! # Mongo Lab Reader
//!
//! Polls the counter document once per second until the run deadline and
//! logs its current value.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lab_common::configs::config_env::MongoLabConfig;
use lab_common::connections::doc_mongo::DocHandler;
use lab_common::loggers::logsetup::setup_logging;
use log::{error, info};
use tokio::time::{interval, sleep_until, Instant};

/// Command-line arguments for the reader.
#[derive(Parser, Debug)]
#[command(author, version, about = "Polls the MongoDB counter document", long_about = None)]
struct Args {
    /// How long the poll loop runs, in seconds.
    #[arg(short, long, default_value_t = 30)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("mongo_reader").context("Failed to setup logging")?;
    let args = Args::parse();
    let cfg = MongoLabConfig::from_env().context("reader: can't parse env values")?;

    let docs = DocHandler::connect(&cfg.mongo_url)
        .await
        .context("mongo: connection failed")?;

    reader_operations(&docs, Duration::from_secs(args.duration)).await;
    Ok(())
}

/// Logs the counter value once per second.
async fn reader_operations(docs: &DocHandler, duration: Duration) {
    let deadline = Instant::now() + duration;
    let mut ticker = interval(Duration::from_secs(1));
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = sleep_until(deadline) => return,
            _ = ticker.tick() => {
                match docs.read_counter().await {
                    Ok(Some(value)) => info!("current value: {}", value),
                    Ok(None) => error!("mongo: can't get value - counter document missing"),
                    Err(err) => error!("mongo: can't get value - {}", err),
                }
            }
        }
    }
}
