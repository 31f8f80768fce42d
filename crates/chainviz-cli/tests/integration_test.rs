//! Integration tests for the chainviz command line tool.
//!
//! Commands are driven through `run` with a configuration pointing at a
//! temporary data directory.

use chainviz_cli::{run, Args, Command};
use clap::Parser;
use chainviz_common::test_utils::{data_fixtures, init_test_logging};
use chainviz_common::{ChainvizError, Column};
use chainviz_config::Config;
use serde_json::json;
use std::path::Path;

fn config_for(dir: &Path) -> Config {
    let mut config = Config::default();
    config.data.dir = dir.to_path_buf();
    config
}

#[tokio::test]
async fn test_list_and_info() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    for name in ["blocks.0.parquet", "blocks.2.parquet", "pendle.0.parquet"] {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }
    let config = config_for(dir.path());

    let listed = run(Command::List, &config).await.unwrap();
    assert_eq!(listed, "blocks\tchunks=2\tmax=2\npendle\tchunks=1\tmax=0\n");

    let info = run(Command::Info { name: "blocks".to_string() }, &config)
        .await
        .unwrap();
    let lines: Vec<&str> = info.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("blocks.0.parquet"));
    assert!(lines[1].ends_with("blocks.2.parquet"));

    let err = run(Command::Info { name: "uniswap".to_string() }, &config)
        .await
        .unwrap_err();
    assert!(matches!(err, ChainvizError::EmptyDataset { .. }));
}

#[tokio::test]
async fn test_option_uses_configured_default_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blocks.json");
    let data = data_fixtures::block_metrics_data(4);
    std::fs::write(&input, serde_json::to_string(&data).unwrap()).unwrap();

    let mut config = config_for(dir.path());
    config.chart.default_column = Some(Column::from("tx_count"));

    let output = run(
        Command::Option {
            input: input.clone(),
            column: None,
            pretty: true,
        },
        &config,
    )
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["series"]["encode"]["y"], json!("tx_count"));
    assert_eq!(value["xAxis"]["data"], serde_json::to_value(&data.time).unwrap());

    let output = run(
        Command::Option {
            input,
            column: Some(Column::Index(0)),
            pretty: false,
        },
        &config,
    )
    .await
    .unwrap();
    assert!(output.contains(r#""encode":{"y":0}"#));
}

#[tokio::test]
async fn test_option_positional_column_from_argv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("minimal.json");
    let data = data_fixtures::minimal_data();
    std::fs::write(&input, serde_json::to_string(&data).unwrap()).unwrap();

    let input_arg = input.to_string_lossy().into_owned();
    let args = Args::try_parse_from(["chainviz", "option", input_arg.as_str(), "-C", "0"]).unwrap();
    let output = run(args.command, &config_for(dir.path())).await.unwrap();

    assert!(output.contains(r#""encode":{"y":0}"#), "got {output}");
}

#[tokio::test]
async fn test_raw_option() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rows.json");
    std::fs::write(&input, "[[100, 1.5], [200, 2.5]]").unwrap();

    let output = run(
        Command::RawOption {
            input,
            pretty: false,
        },
        &config_for(dir.path()),
    )
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["dataset"]["dimensions"], json!(["time", "value"]));
    assert_eq!(value["dataset"]["source"], json!([[100, 1.5], [200, 2.5]]));
    assert_eq!(value["series"], json!({ "type": "line" }));
}

#[tokio::test]
async fn test_option_rejects_malformed_payload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    std::fs::write(&input, r#"{"name": "x"}"#).unwrap();

    let err = run(
        Command::Option {
            input,
            column: None,
            pretty: false,
        },
        &config_for(dir.path()),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ChainvizError::Serialization(_)));
}
