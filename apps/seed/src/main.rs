//! # Quill Seed
//!
//! Loads authors and posts from a JSON file through the field validators.
//! Rejected records are logged with the failing field and skipped.

mod config;
mod seed;
mod store;

use config::SeedConfig;
use seed::SeedFile;
use store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = SeedConfig::from_env(std::env::args().nth(1));

    init_tracing(config.json_logs);

    tracing::info!(seed_file = %config.seed_file.display(), "Starting seed run");

    let seed = SeedFile::load(&config.seed_file)?;
    let store = Store::open(config.database.as_ref()).await?;

    let report = seed::run(&store, seed).await?;

    tracing::info!(
        authors_created = report.authors_created,
        authors_rejected = report.authors_rejected,
        posts_created = report.posts_created,
        posts_rejected = report.posts_rejected,
        "Seed run finished"
    );

    Ok(())
}

fn init_tracing(json_logs: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,seed=debug,quill_infra=debug"));

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
