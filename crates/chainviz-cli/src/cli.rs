//! Command line arguments.

use chainviz_common::Column;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::path::PathBuf;

/// Browse chain metric datasets and build chart options for them.
#[derive(Parser, Debug)]
#[command(name = "chainviz", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, overriding the configuration (e.g. "debug")
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every dataset in the data directory
    List,

    /// Show the chunk files of one dataset
    Info {
        /// Dataset name
        name: String,
    },

    /// Print the line chart option for a serialised payload
    Option {
        /// Payload JSON file, or "-" for stdin
        input: PathBuf,

        /// Column to plot, by name or position
        #[arg(short = 'C', long, value_parser = parse_column)]
        column: Option<Column>,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the line chart option for an untyped `[time, value]` row source
    RawOption {
        /// Source JSON file, or "-" for stdin
        input: PathBuf,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
}

/// Digit-only text selects a column by position, anything else by name.
fn parse_column(s: &str) -> Result<Column, Infallible> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_command() {
        let args = Args::try_parse_from([
            "chainviz", "--log-level", "debug", "option", "blocks.json", "-C", "2", "--pretty",
        ])
        .unwrap();

        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Option { input, column, pretty } => {
                assert_eq!(input, PathBuf::from("blocks.json"));
                assert_eq!(column, Some(Column::Index(2)));
                assert!(pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_named_column() {
        let args =
            Args::try_parse_from(["chainviz", "option", "-", "--column", "tx_count"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Option { column: Some(Column::Name(ref name)), .. } if name == "tx_count"
        ));
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = Args::try_parse_from(["chainviz", "info", "blocks", "--config", "c.yaml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("c.yaml")));
        assert!(matches!(args.command, Command::Info { ref name } if name == "blocks"));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
