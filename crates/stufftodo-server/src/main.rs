//! Stuff To Do server entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use stufftodo_api::{ApiConfig, AppState};
use stufftodo_worklist::{InMemoryUserDirectory, InMemoryWorklist};

mod seed;

/// Worklist server for the Stuff To Do feature.
#[derive(Debug, Parser)]
#[command(name = "stufftodo", version)]
struct Cli {
    /// Host to bind to.
    #[arg(long, env = "STUFFTODO_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to.
    #[arg(long, env = "STUFFTODO_PORT", default_value_t = 3030)]
    port: u16,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Start with demo users and issues instead of an empty worklist.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() {
    // Load .env.local if it exists
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    fmt().with_env_filter(filter).with_target(false).init();

    let worklist = InMemoryWorklist::new();
    let users = InMemoryUserDirectory::new();
    if cli.demo {
        seed::demo_data(&worklist, &users);
        tracing::info!("seeded demo users and issues");
    }

    let state = AppState::new(
        ApiConfig::new(cli.host, cli.port),
        Arc::new(worklist),
        Arc::new(users),
    );

    if let Err(e) = stufftodo_api::serve(state).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
