//! # Redis Cache Implementation
//!
//! Provides an asynchronous wrapper for the Redis key-value, set, list,
//! hash, sorted-set and stream operations exercised by lab_redis.

use std::collections::BTreeMap;

use redis::aio::ConnectionManager;
use redis::streams::{StreamReadOptions, StreamReadReply};
use redis::{AsyncCommands, Client, RedisResult};

/// Field name under which stream messages carry their payload.
const STREAM_FIELD: &str = "message";

/// A handler for Redis cache interactions.
pub struct CacheHandler {
    conn: ConnectionManager,
}

impl CacheHandler {
    /// Connects to the Redis server and verifies the connection with a PING.
    ///
    /// # Arguments
    /// * `url` - The redis URL (e.g., "redis://127.0.0.1/").
    pub async fn connect(url: &str) -> RedisResult<Self> {
        let client = Client::open(url)?;
        let mut conn = client.get_connection_manager().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(Self { conn })
    }

    /// Stores a string value with an expiry in seconds.
    pub async fn set_string(&mut self, key: &str, value: &str, ttl_secs: u64) -> RedisResult<()> {
        self.conn.set_ex(key, value, ttl_secs).await
    }

    /// Reads a string value; `None` when the key does not exist.
    pub async fn get_string(&mut self, key: &str) -> RedisResult<Option<String>> {
        self.conn.get(key).await
    }

    /// Adds members to a set.
    pub async fn add_set_members(&mut self, key: &str, members: &[&str]) -> RedisResult<()> {
        self.conn.sadd(key, members).await
    }

    /// Returns the intersection over the given set key.
    pub async fn intersect_sets(&mut self, key: &str) -> RedisResult<Vec<String>> {
        self.conn.sinter(key).await
    }

    /// Prepends values to a list (LPUSH).
    pub async fn push_front(&mut self, key: &str, values: &[&str]) -> RedisResult<()> {
        self.conn.lpush(key, values).await
    }

    /// Appends values to a list (RPUSH).
    pub async fn push_back(&mut self, key: &str, values: &[&str]) -> RedisResult<()> {
        self.conn.rpush(key, values).await
    }

    /// Returns the whole list, head first.
    pub async fn list_range(&mut self, key: &str) -> RedisResult<Vec<String>> {
        self.conn.lrange(key, 0, -1).await
    }

    /// Removes and returns the list head; `None` for an empty list.
    pub async fn pop_front(&mut self, key: &str) -> RedisResult<Option<String>> {
        self.conn.lpop(key, None).await
    }

    /// Removes a key entirely.
    pub async fn delete(&mut self, key: &str) -> RedisResult<()> {
        self.conn.del(key).await
    }

    /// Sets a single hash field.
    pub async fn set_hash_field(&mut self, key: &str, field: &str, value: &str) -> RedisResult<()> {
        self.conn.hset(key, field, value).await
    }

    /// Returns all values stored in a hash.
    pub async fn hash_values(&mut self, key: &str) -> RedisResult<Vec<String>> {
        self.conn.hvals(key).await
    }

    /// Adds a scored member to a sorted set.
    pub async fn add_scored_member(&mut self, key: &str, member: &str, score: f64) -> RedisResult<()> {
        self.conn.zadd(key, member, score).await
    }

    /// Returns the cardinality of a sorted set.
    pub async fn scored_set_len(&mut self, key: &str) -> RedisResult<u64> {
        self.conn.zcard(key).await
    }

    /// Returns the members of a sorted set with scores inside `[min, max]`.
    pub async fn scored_range(&mut self, key: &str, min: f64, max: f64) -> RedisResult<Vec<String>> {
        self.conn.zrangebyscore(key, min, max).await
    }

    /// Appends a message entry to the stream and returns the generated id.
    pub async fn push_stream_message(&mut self, stream: &str, text: &str) -> RedisResult<String> {
        let mut fields = BTreeMap::new();
        fields.insert(STREAM_FIELD, encode_stream_message(text));
        self.conn.xadd_map(stream, "*", fields).await
    }

    /// Blocks up to `block_ms` for one new stream entry and returns its raw
    /// message payload. `None` when the block timed out without entries.
    pub async fn read_stream_message(
        &mut self,
        stream: &str,
        block_ms: usize,
    ) -> RedisResult<Option<String>> {
        let opts = StreamReadOptions::default().count(1).block(block_ms);
        let reply: Option<StreamReadReply> = self
            .conn
            .xread_options(&[stream], &["$"], &opts)
            .await?;
        let Some(reply) = reply else {
            return Ok(None);
        };
        for key in reply.keys {
            for entry in key.ids {
                if let Some(raw) = entry.get::<String>(STREAM_FIELD) {
                    return Ok(Some(raw));
                }
            }
        }
        Ok(None)
    }
}

/// JSON-encodes a message payload for the stream field.
pub fn encode_stream_message(text: &str) -> String {
    serde_json::Value::String(text.to_owned()).to_string()
}

/// Decodes a stream field payload back into the original message.
pub fn decode_stream_message(raw: &str) -> serde_json::Result<String> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_message_round_trip() {
        let encoded = encode_stream_message("hi at 2024-01-01 00:00:00");
        assert_eq!(encoded, r#""hi at 2024-01-01 00:00:00""#);
        let decoded = decode_stream_message(&encoded).expect("payload should decode");
        assert_eq!(decoded, "hi at 2024-01-01 00:00:00");
    }

    #[test]
    fn test_decode_rejects_non_string_payload() {
        assert!(decode_stream_message("{not json").is_err());
        assert!(decode_stream_message("42").is_err());
    }
}
