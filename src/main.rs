use crate::cli::Args;
use crate::server::runner::run_server;
use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod downloader;
mod notes;
mod request;
mod server;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over the command-line flags.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    debug!(?args, "arguments parsed");

    run_server(args.server_options()).await
}
