use anyhow::Result;

use survev_spi_rating::cli::Command;
use survev_spi_rating::{handle_completions, handle_extract, handle_rate, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Rate {
            file,
            overrides,
            confidence_constant,
            json,
        } => handle_rate(file.as_deref(), overrides, *confidence_constant, *json),
        Command::Extract { file, json } => handle_extract(file.as_deref(), *json),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
