//! Main entry point for the chainviz command line tool.

use anyhow::{Context, Result};
use chainviz_cli::{apply_log_level, run, Args};
use chainviz_common::init_logging;
use chainviz_config::ConfigLoader;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .await
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::load().await.context("loading configuration")?,
    };
    apply_log_level(&mut config, args.log_level).context("applying --log-level")?;

    init_logging(&config.logging.to_logging_config())?;
    debug!(?config, "configuration loaded");

    let output = run(args.command, &config).await?;
    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
