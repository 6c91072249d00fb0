//! # RabbitMQ Queue Implementation
//!
//! Wraps the AMQP operations lab_rabbit performs: declaring the durable
//! test queue, publishing JSON-encoded integers and opening an auto-ack
//! consumer stream.

use lapin::options::{BasicConsumeOptions, BasicPublishOptions, QueueDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, Consumer};

/// Name of the queue both lab binaries declare and use.
pub const QUEUE_NAME: &str = "TestQueue";

/// Largest payload value the consumer accepts.
pub const VALUE_LIMIT: i64 = 10;

/// A handler for RabbitMQ queue interactions.
///
/// The connection is held for the lifetime of the handler; dropping the
/// handler closes the channel and the connection.
pub struct QueueHandler {
    _conn: Connection,
    channel: Channel,
    queue_name: String,
}

impl QueueHandler {
    /// Connects to the broker, opens a channel and declares the queue as
    /// durable, non-exclusive and non-auto-delete.
    pub async fn connect(url: &str, queue_name: &str) -> lapin::Result<Self> {
        let conn = Connection::connect(url, ConnectionProperties::default()).await?;
        let channel = conn.create_channel().await?;
        channel
            .queue_declare(
                queue_name,
                QueueDeclareOptions {
                    durable: true,
                    ..QueueDeclareOptions::default()
                },
                FieldTable::default(),
            )
            .await?;
        Ok(Self {
            _conn: conn,
            channel,
            queue_name: queue_name.to_owned(),
        })
    }

    /// Publishes a JSON-encoded integer to the queue via the default
    /// exchange.
    pub async fn publish_int(&self, value: i64) -> lapin::Result<()> {
        let payload = serde_json::Value::from(value).to_string().into_bytes();
        self.channel
            .basic_publish(
                "",
                &self.queue_name,
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default().with_content_type("text/plain".into()),
            )
            .await?
            .await?;
        Ok(())
    }

    /// Opens an auto-ack consumer on the queue.
    pub async fn consume(&self, consumer_tag: &str) -> lapin::Result<Consumer> {
        self.channel
            .basic_consume(
                &self.queue_name,
                consumer_tag,
                BasicConsumeOptions {
                    no_ack: true,
                    ..BasicConsumeOptions::default()
                },
                FieldTable::default(),
            )
            .await
    }
}

/// Whether a consumed value is inside the accepted range.
pub fn within_limit(value: i64) -> bool {
    value <= VALUE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_limit_boundary() {
        assert!(within_limit(10));
        assert!(!within_limit(11));
    }

    #[test]
    fn test_within_limit_accepts_small_values() {
        assert!(within_limit(0));
        assert!(within_limit(-3));
        assert!(!within_limit(14));
    }
}
