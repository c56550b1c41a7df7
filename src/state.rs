//! Process-wide application state.

use crate::config::RedisProperties;
use crate::infrastructure::RedisConnectionFactory;

/// Shared handles built once at startup and passed to consumers.
///
/// Replaces any hidden global registry: whoever needs a Redis connection
/// receives this state (or a clone of it) explicitly.
#[derive(Clone)]
pub struct AppState {
    pub properties: RedisProperties,
    pub redis: RedisConnectionFactory,
}
