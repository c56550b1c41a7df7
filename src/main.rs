use anyhow::Result;
use tracing_subscriber::EnvFilter;
use url_screener::{bootstrap, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; real environment variables take priority.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    config.print_summary();

    let state = bootstrap::init(&config)?;

    // One-shot connectivity probe; failures surface here rather than at
    // factory construction.
    match state.redis.connect().await {
        Ok(_) => tracing::info!("Redis endpoint is reachable"),
        Err(e) => {
            tracing::error!("Redis connectivity probe failed: {e:#}");
            return Err(e);
        }
    }

    Ok(())
}
