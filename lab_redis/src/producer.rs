//! # Redis Lab Producer
//!
//! Exercises the basic Redis data structures (strings, sets, lists, hashes,
//! sorted sets) with a fixed sequence of calls, then appends a timestamped
//! message to the configured stream once per second until the run deadline.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use lab_common::configs::config_env::RedisLabConfig;
use lab_common::connections::cache_redis::CacheHandler;
use lab_common::loggers::logsetup::setup_logging;
use log::{error, info};
use tokio::time::{interval, sleep_until, Instant};

/// Command-line arguments for the producer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Exercises Redis data structures and pushes stream messages", long_about = None)]
struct Args {
    /// How long the stream push loop runs, in seconds.
    #[arg(short, long, default_value_t = 10)]
    duration: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    setup_logging("redis_producer").context("Failed to setup logging")?;
    let args = Args::parse();
    let cfg = RedisLabConfig::from_env().context("producer: can't parse env values")?;

    let mut cache = CacheHandler::connect(&cfg.redis_url)
        .await
        .context("producer: can't create redis client instance")?;

    check_string(&mut cache).await;
    println!("------------------");
    check_sets(&mut cache).await;
    println!("------------------");
    check_lists(&mut cache).await;
    println!("------------------");
    check_hash(&mut cache).await;
    println!("------------------");
    check_sorted_sets(&mut cache).await;
    println!("------------------");

    push_messages(
        &mut cache,
        &cfg.stream_name,
        Duration::from_secs(args.duration),
    )
    .await;
    Ok(())
}

/// Sets a string with a 5 second expiry and reads it back.
async fn check_string(cache: &mut CacheHandler) {
    let string_value = "some string";
    if let Err(err) = cache.set_string("stringKey", string_value, 5).await {
        error!("redis: can't set value - {}", err);
        return;
    }
    match cache.get_string("stringKey").await {
        Ok(Some(value)) => {
            info!("test string value: {}", string_value);
            info!("string value from redis: {}", value);
        }
        Ok(None) => error!("redis: can't find such key"),
        Err(err) => error!("redis: can't get value - {}", err),
    }
}

/// Adds two members to a set and prints its intersection.
async fn check_sets(cache: &mut CacheHandler) {
    if let Err(err) = cache.add_set_members("people", &["tom", "john"]).await {
        error!("redis: can't add values to set - {}", err);
    }
    match cache.intersect_sets("people").await {
        Ok(members) => info!("{:?}", members),
        Err(err) => error!("redis: can't intersect set - {}", err),
    }
}

/// Pushes to both list ends, pops the head and prints the list after each
/// mutation. The final list is ["value1", "value3"].
async fn check_lists(cache: &mut CacheHandler) {
    if let Err(err) = cache.push_front("testList", &["value1", "value2"]).await {
        error!("redis: can't push values to list - {}", err);
    }
    log_list(cache, "testList").await;
    if let Err(err) = cache.push_back("testList", &["value3"]).await {
        error!("redis: can't push values to list - {}", err);
    }
    log_list(cache, "testList").await;
    if let Err(err) = cache.pop_front("testList").await {
        error!("redis: can't delete values from list - {}", err);
    }
    log_list(cache, "testList").await;
}

async fn log_list(cache: &mut CacheHandler, key: &str) {
    match cache.list_range(key).await {
        Ok(values) => println!("values from list: {:?}", values),
        Err(err) => error!("redis: can't get values from list - {}", err),
    }
}

/// Sets a single hash field and prints all hash values.
async fn check_hash(cache: &mut CacheHandler) {
    if let Err(err) = cache.set_hash_field("myHash", "keyHash", "some value").await {
        error!("redis: error while setting hash - {}", err);
    }
    match cache.hash_values("myHash").await {
        Ok(values) => info!("redis: hash for myHash - {:?}", values),
        Err(err) => error!("redis: can't get hash values - {}", err),
    }
}

/// Adds a scored member to a sorted set, then prints the cardinality and a
/// score-bounded range.
async fn check_sorted_sets(cache: &mut CacheHandler) {
    if let Err(err) = cache.add_scored_member("sortedSet", "Tomas", 12.5).await {
        error!("redis: can't add values to set - {}", err);
    }
    match cache.scored_set_len("sortedSet").await {
        Ok(size) => info!("{}", size),
        Err(err) => error!("redis: can't get zset size - {}", err),
    }
    match cache.scored_range("sortedSet", 5.0, 15.0).await {
        Ok(members) => info!("{:?}", members),
        Err(err) => error!("redis: can't get zrange - {}", err),
    }
}

/// Appends one timestamped message per second until the deadline.
async fn push_messages(cache: &mut CacheHandler, stream: &str, duration: Duration) {
    let deadline = Instant::now() + duration;
    let mut ticker = interval(Duration::from_secs(1));
    // The first interval tick completes immediately; consume it so the loop
    // pushes on whole-second boundaries like the original.
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = sleep_until(deadline) => return,
            _ = ticker.tick() => {
                let message = format!(
                    "hi at {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
                );
                if let Err(err) = cache.push_stream_message(stream, &message).await {
                    error!("producer: error while sending message - {}", err);
                }
            }
        }
    }
}
