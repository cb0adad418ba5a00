use anyhow::Result;
use catalog_gallery::args::Args;
use catalog_gallery::{list_lists, run};
use clap::Parser;
use std::fs;

#[tokio::main]
pub async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.list_lists {
        return list_lists(&args).await;
    }

    fs::create_dir_all(&args.output_dir)?;
    run(&args).await
}
