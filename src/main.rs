//! MovieNear - filming-location proximity mapper.
//!
//! Finds where the movies of a given release year were filmed and draws
//! the sites nearest to a user-supplied coordinate onto an HTML map.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if movienear::cli::is_verbose() {
        "movienear=info"
    } else {
        "movienear=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    movienear::cli::run().await
}
