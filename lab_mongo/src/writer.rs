//! # Mongo Lab Writer
//!
//! Seeds the counter document with a value of zero, then increments it once
//! every two seconds until the run deadline.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lab_common::configs::config_env::MongoLabConfig;
use lab_common::connections::doc_mongo::DocHandler;
use lab_common::loggers::logsetup::setup_logging;
use log::error;
use tokio::time::{interval, sleep_until, timeout, Instant};

/// Time budget for the initial insert.
const SEED_TIMEOUT: Duration = Duration::from_secs(5);

/// Command-line arguments for the writer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Seeds and increments the MongoDB counter document", long_about = None)]
struct Args {
    /// How long the increment loop runs, in seconds.
    #[arg(short, long, default_value_t = 30)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("mongo_writer").context("Failed to setup logging")?;
    let args = Args::parse();
    let cfg = MongoLabConfig::from_env().context("writer: can't parse env values")?;

    let docs = DocHandler::connect(&cfg.mongo_url)
        .await
        .context("mongo: connection failed")?;

    seed_value(&docs).await;
    writer_operations(&docs, Duration::from_secs(args.duration)).await;
    Ok(())
}

/// Inserts the initial counter document, bounded by a short timeout.
async fn seed_value(docs: &DocHandler) {
    match timeout(SEED_TIMEOUT, docs.seed_counter()).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!("mongo: can't insert value - {}", err),
        Err(_) => error!("mongo: can't insert value - operation timed out"),
    }
}

/// Reads, increments and writes back the counter every two seconds.
async fn writer_operations(docs: &DocHandler, duration: Duration) {
    let deadline = Instant::now() + duration;
    let mut ticker = interval(Duration::from_secs(2));
    // Skip the immediate first tick so increments land on the 2 s cadence.
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = sleep_until(deadline) => return,
            _ = ticker.tick() => {
                match docs.bump_counter().await {
                    Ok(Some(_)) => {}
                    Ok(None) => error!("mongo: can't get value - counter document missing"),
                    Err(err) => error!("mongo: can't update value - {}", err),
                }
            }
        }
    }
}
