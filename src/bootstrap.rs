//! Startup wiring.
//!
//! One explicit routine builds the configuration-derived handles and returns
//! them as [`AppState`]. There is no implicit discovery; components receive
//! their dependencies from here.

use crate::config::Config;
use crate::infrastructure::RedisConnectionFactory;
use crate::state::AppState;
use anyhow::Result;

/// Builds the process-wide state from validated configuration.
///
/// Performs no I/O: the Redis factory connects lazily on first use.
///
/// # Errors
///
/// Returns an error if the Redis connection URL cannot be constructed.
pub fn init(config: &Config) -> Result<AppState> {
    let redis = RedisConnectionFactory::new(&config.redis)?;

    Ok(AppState {
        properties: config.redis.clone(),
        redis,
    })
}
