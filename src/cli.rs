use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "survev SPI calculator")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Rate a stats paste and print per-mode and overall SPI
    Rate {
        /// File containing the paste; reads stdin when omitted
        file: Option<PathBuf>,
        /// Manual field override, e.g. --set solo.games=280 (repeatable)
        #[arg(long = "set", value_name = "MODE.FIELD=VALUE")]
        overrides: Vec<String>,
        /// Confidence constant K; higher trusts small samples more slowly
        #[arg(long)]
        confidence_constant: Option<f64>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show only what the parser recovered from a paste
    Extract {
        /// File containing the paste; reads stdin when omitted
        file: Option<PathBuf>,
        /// Emit JSON instead of a field listing
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
