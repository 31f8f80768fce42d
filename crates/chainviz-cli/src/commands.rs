//! Subcommand implementations.
//!
//! Each command returns the text to print so the binary stays a thin shell.

use crate::cli::Command;
use chainviz_charts::{dataset_line_option, Catalog, ChartBuilder, ChartOption, LineChart};
use chainviz_common::{format_timestamp_millis, time_span, ChainvizError, Column, Data, Result};
use chainviz_config::{validate_log_level, Config};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Runs one subcommand against the loaded configuration.
pub async fn run(command: Command, config: &Config) -> Result<String> {
    let catalog = Catalog::new(&config.data.dir, &config.data.extension);

    match command {
        Command::List => list(&catalog).await,
        Command::Info { name } => info(&catalog, &name).await,
        Command::Option {
            input,
            column,
            pretty,
        } => {
            let data: Data = serde_json::from_str(&read_input(&input).await?)?;
            render_line_option(&LineChart, &data, column, config.chart.default_column.as_ref(), pretty)
        }
        Command::RawOption { input, pretty } => {
            let source: serde_json::Value = serde_json::from_str(&read_input(&input).await?)?;
            render(&dataset_line_option(&source), pretty)
        }
    }
}

/// One line per dataset: name, chunk count, highest chunk index.
pub async fn list(catalog: &Catalog) -> Result<String> {
    let datasets = catalog.list().await?;
    info!(count = datasets.len(), "listed datasets");

    Ok(datasets
        .iter()
        .map(|dataset| {
            format!(
                "{}\tchunks={}\tmax={}\n",
                dataset.name,
                dataset.chunks.len(),
                dataset.max
            )
        })
        .collect())
}

/// Full paths of one dataset's chunks, one per line.
pub async fn info(catalog: &Catalog, name: &str) -> Result<String> {
    let dataset = catalog.require(name).await?;

    Ok(catalog
        .chunk_paths(&dataset)
        .into_iter()
        .map(|path| format!("{}\n", path.display()))
        .collect())
}

/// Applies the `--log-level` flag, rejecting filters logging would ignore.
pub fn apply_log_level(config: &mut Config, level: Option<String>) -> Result<()> {
    if let Some(level) = level {
        validate_log_level(&level)?;
        config.logging.level = level;
    }
    Ok(())
}

/// Picks the column to plot: explicit choice, then configured default,
/// then the payload's first column.
pub fn resolve_column(
    explicit: Option<Column>,
    configured: Option<&Column>,
    data: &Data,
) -> Result<Column> {
    explicit
        .or_else(|| configured.cloned())
        .or_else(|| data.column_names().next().map(Column::from))
        .ok_or_else(|| {
            ChainvizError::validation(
                format!("payload '{}' has no columns to plot", data.name),
                Some("column"),
            )
        })
}

/// Builds and serialises the option for `data`, logging payload diagnostics.
pub fn render_line_option(
    builder: &dyn ChartBuilder,
    data: &Data,
    explicit: Option<Column>,
    configured: Option<&Column>,
    pretty: bool,
) -> Result<String> {
    let column = resolve_column(explicit, configured, data)?;

    let misaligned = data.misaligned_columns();
    if !misaligned.is_empty() {
        warn!(
            dataset = %data.name,
            samples = data.sample_count(),
            columns = ?misaligned,
            "columns differ in length from the time axis"
        );
    }
    if let Some((first, last)) = time_span(&data.time) {
        debug!(
            from = %format_timestamp_millis(first),
            to = %format_timestamp_millis(last),
            "payload time span"
        );
    }

    info!(chart = builder.name(), dataset = %data.name, %column, "rendering option");
    render(&builder.build(data, column), pretty)
}

fn render(option: &ChartOption<'_>, pretty: bool) -> Result<String> {
    if pretty {
        option.to_json_pretty()
    } else {
        option.to_json()
    }
}

async fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        return Ok(buf);
    }
    Ok(tokio::fs::read_to_string(path).await?)
}
