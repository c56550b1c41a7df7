//! Redis connection factory.

use crate::config::RedisProperties;
use anyhow::{Context, Result};
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::info;

/// Factory for connections to the configured Redis endpoint.
///
/// Construction only captures the endpoint; no socket is opened until
/// [`connect`](Self::connect) is called. The factory is cheap to clone and
/// safe to share across tasks; connection-level thread safety is delegated
/// to the `redis` crate.
#[derive(Clone)]
pub struct RedisConnectionFactory {
    client: Client,
    properties: RedisProperties,
}

impl RedisConnectionFactory {
    /// Builds a factory from validated properties. Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns an error only if the rendered connection URL is rejected by
    /// the client library; reachability of the endpoint is not checked here.
    pub fn new(properties: &RedisProperties) -> Result<Self> {
        let client = Client::open(properties.url().as_str())
            .with_context(|| format!("Failed to create Redis client for {}", properties.url()))?;

        Ok(Self {
            client,
            properties: properties.clone(),
        })
    }

    /// Opens a managed connection and validates it with a PING.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unreachable or the PING fails.
    pub async fn connect(&self) -> Result<ConnectionManager> {
        info!(
            "Connecting to Redis at {}:{}",
            self.properties.host, self.properties.port
        );

        let mut manager = ConnectionManager::new(self.client.clone())
            .await
            .context("Failed to connect to Redis")?;

        manager
            .ping::<()>()
            .await
            .context("Redis PING failed")?;

        info!("✓ Connected to Redis");

        Ok(manager)
    }

    /// The underlying client, for callers managing their own connections.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The endpoint this factory was built from.
    pub fn properties(&self) -> &RedisProperties {
        &self.properties
    }
}
