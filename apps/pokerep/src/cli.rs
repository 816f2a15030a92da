//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pokerep - client for the Pokémon report-generation backend
#[derive(Parser)]
#[command(name = "pokerep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate, list, download and delete Pokémon reports")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true, value_name = "URL", env = "POKEREP_BASE_URL")]
    pub base_url: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the valid report categories
    Types,

    /// List all generated reports
    #[command(alias = "ls")]
    List,

    /// Request generation of a new report
    Create {
        /// Report category (one of `pokerep types`)
        #[arg(long = "type", value_name = "CATEGORY")]
        category: String,

        /// Number of Pokémon to include (integer >= 1)
        #[arg(long, value_name = "N")]
        qty: String,
    },

    /// Delete a report and its stored blob
    #[command(alias = "rm")]
    Delete {
        /// Report id as shown by `pokerep list`
        id: String,
    },

    /// Download a report's CSV artifact
    #[command(alias = "dl")]
    Download {
        /// Report id as shown by `pokerep list`
        id: String,

        /// Write the artifact to this path instead of printing its URL
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create() {
        let cli = Cli::try_parse_from(["pokerep", "create", "--type", "fire", "--qty", "3"])
            .unwrap();
        match cli.command {
            Commands::Create { category, qty } => {
                assert_eq!(category, "fire");
                assert_eq!(qty, "3");
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pokerep", "list", "--json"]).unwrap();
        assert!(cli.global.json);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn download_output_is_optional() {
        let cli = Cli::try_parse_from(["pokerep", "download", "42"]).unwrap();
        match cli.command {
            Commands::Download { id, output } => {
                assert_eq!(id, "42");
                assert!(output.is_none());
            }
            _ => panic!("wrong command"),
        }
    }
}
