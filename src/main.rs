use crate::pipeline::launch;
use anyhow::Result;
use clap::Parser;

mod agents;
mod cli;
mod config;
mod error;
mod i18n;
mod ingest;
mod llm;
mod outlet;
mod pipeline;
mod session;
mod types;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config();

    launch(&config).await
}
