//! External integrations.

pub mod redis;

pub use redis::RedisConnectionFactory;
