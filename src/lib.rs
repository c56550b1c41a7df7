//! # URL Screener
//!
//! Bootstrap components for a Redis-backed malicious URL screening service.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The typed error raised on malware detection
//! - **Infrastructure Layer** ([`infrastructure`]) - The Redis connection factory
//! - **Configuration** ([`config`]) - Environment-driven settings
//! - **Bootstrap** ([`bootstrap`]) - Explicit startup wiring into [`state::AppState`]
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Settings are loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub use domain::MalwareUrlError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::config::{Config, RedisProperties};
    pub use crate::domain::MalwareUrlError;
    pub use crate::infrastructure::RedisConnectionFactory;
    pub use crate::state::AppState;
}
