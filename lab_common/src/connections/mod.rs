//! # Connections Module
//!
//! This module holds the thin client handles for the external services the
//! labs talk to: a key-value/stream store, a document database and an AMQP
//! broker. Each handle wraps one third-party client and exposes exactly the
//! operations the lab binaries perform.

/// Module for Redis cache and stream operations.
pub mod cache_redis;

/// Module for the MongoDB counter document operations.
pub mod doc_mongo;

/// Module for RabbitMQ queue declaration, publishing and consuming.
pub mod queue_rabbit;
