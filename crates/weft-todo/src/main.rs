//! Application binary - serves the task pages over HTTP.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weft_todo::{AppConfig, server};

#[derive(Parser, Debug)]
#[command(name = "weft-todo")]
#[command(about = "Example task-tracking web application")]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short = 'P', long, default_value = "3333")]
    port: u16,

    /// Title shown on every page
    #[arg(long, default_value = "Example Rust web app")]
    title: String,

    /// Seed the store with this many demo tasks
    #[arg(long, default_value = "0")]
    seed: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weft_todo=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!(host = %args.host, port = args.port, "Starting application");

    let config = AppConfig {
        host: args.host,
        port: args.port,
        title: args.title,
        seed: args.seed,
    };

    server::run_server(config).await?;

    Ok(())
}
