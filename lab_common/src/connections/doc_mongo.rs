//! # MongoDB Counter Document Implementation
//!
//! Wraps the handful of document operations lab_mongo performs: seeding a
//! single counter document, reading it back and incrementing it in place.

use mongodb::bson::{doc, Document};
use mongodb::error::Result as MongoResult;
use mongodb::{Client, Collection};

const DB_NAME: &str = "test";
const COLLECTION_NAME: &str = "values";

/// Name under which the counter document is stored.
pub const COUNTER_NAME: &str = "testValue";

/// A handler for the counter document collection.
pub struct DocHandler {
    collection: Collection<Document>,
}

impl DocHandler {
    /// Connects to the MongoDB instance and targets the `test.values`
    /// collection.
    pub async fn connect(url: &str) -> MongoResult<Self> {
        let client = Client::with_uri_str(url).await?;
        let collection = client.database(DB_NAME).collection::<Document>(COLLECTION_NAME);
        Ok(Self { collection })
    }

    /// Inserts the counter document with an initial value of zero.
    pub async fn seed_counter(&self) -> MongoResult<()> {
        self.collection
            .insert_one(doc! { "valueName": COUNTER_NAME, "value": 0_i64 })
            .await?;
        Ok(())
    }

    /// Reads the current counter value; `None` when the document is missing.
    pub async fn read_counter(&self) -> MongoResult<Option<i64>> {
        let found = self
            .collection
            .find_one(doc! { "valueName": COUNTER_NAME })
            .await?;
        Ok(found.and_then(|document| document.get_i64("value").ok()))
    }

    /// Increments the counter by one and returns the new value, or `None`
    /// when the document is missing.
    pub async fn bump_counter(&self) -> MongoResult<Option<i64>> {
        let Some(current) = self.read_counter().await? else {
            return Ok(None);
        };
        let next = current + 1;
        self.collection
            .update_one(
                doc! { "valueName": COUNTER_NAME },
                doc! { "$set": { "value": next } },
            )
            .await?;
        Ok(Some(next))
    }

    /// Removes any existing counter documents. Used by the integration
    /// runners to start from a clean slate.
    pub async fn clear_counter(&self) -> MongoResult<()> {
        self.collection
            .delete_many(doc! { "valueName": COUNTER_NAME })
            .await?;
        Ok(())
    }
}
