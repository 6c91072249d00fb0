//! # Redis List Sequence Integration Test
//!
//! Runs the lab_redis list sequence against a live Redis instance and
//! asserts the post-condition after every mutation:
//! 1.  LPUSH value1 value2 leaves ["value2", "value1"].
//! 2.  RPUSH value3 leaves ["value2", "value1", "value3"].
//! 3.  LPOP removes the head, leaving ["value1", "value3"].
//!
//! Requires `REDIS_URL` (defaults to a local instance).

use lab_common::connections::cache_redis::CacheHandler;

const TEST_LIST: &str = "testList";

#[tokio::main]
async fn main() {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_string());
    let mut cache = CacheHandler::connect(&url)
        .await
        .expect("Failed to connect to redis");

    // Start from a clean list so reruns see the same sequence.
    cache.delete(TEST_LIST).await.expect("Failed to clear test list");

    cache
        .push_front(TEST_LIST, &["value1", "value2"])
        .await
        .expect("LPUSH failed");
    let after_lpush = cache.list_range(TEST_LIST).await.expect("LRANGE failed");
    assert_eq!(after_lpush, ["value2", "value1"], "unexpected list after LPUSH");

    cache
        .push_back(TEST_LIST, &["value3"])
        .await
        .expect("RPUSH failed");
    let after_rpush = cache.list_range(TEST_LIST).await.expect("LRANGE failed");
    assert_eq!(
        after_rpush,
        ["value2", "value1", "value3"],
        "unexpected list after RPUSH"
    );

    let popped = cache.pop_front(TEST_LIST).await.expect("LPOP failed");
    assert_eq!(popped.as_deref(), Some("value2"), "LPOP should remove the head");
    let after_lpop = cache.list_range(TEST_LIST).await.expect("LRANGE failed");
    assert_eq!(after_lpop, ["value1", "value3"], "unexpected final list");

    println!("test_redis_lists: all list post-conditions hold");
}
