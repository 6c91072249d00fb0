//! # Mongo Counter Integration Test
//!
//! Seeds the counter document on a live MongoDB instance and verifies it
//! advances by exactly one per bump, mirroring what the lab_mongo writer
//! does every tick.
//!
//! Requires `MONGO_URL` (defaults to a local instance).

use lab_common::connections::doc_mongo::DocHandler;

#[tokio::main]
async fn main() {
    let url = std::env::var("MONGO_URL")
        .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());
    let docs = DocHandler::connect(&url)
        .await
        .expect("Failed to connect to mongo");

    // Remove leftovers from earlier runs, then seed at zero.
    docs.clear_counter().await.expect("Failed to clear counter");
    docs.seed_counter().await.expect("Failed to seed counter");

    let seeded = docs.read_counter().await.expect("Failed to read counter");
    assert_eq!(seeded, Some(0), "freshly seeded counter should be zero");

    let first = docs.bump_counter().await.expect("Failed to bump counter");
    assert_eq!(first, Some(1), "first bump should yield one");
    let second = docs.bump_counter().await.expect("Failed to bump counter");
    assert_eq!(second, Some(2), "second bump should yield two");

    let stored = docs.read_counter().await.expect("Failed to read counter");
    assert_eq!(stored, Some(2), "stored value should match the last bump");

    println!("test_mongo_counter: counter advances by one per bump");
}
