pub mod cli;
pub mod config;
pub mod domain;
pub mod extractor;
pub mod rating;
pub mod services;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::domain::overrides;
use crate::services::processing::ProcessingService;
use crate::services::report;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_rate(
    file: Option<&Path>,
    override_args: &[String],
    confidence_constant: Option<f64>,
    json: bool,
) -> Result<()> {
    let raw = read_paste(file)?;
    let overrides = overrides::parse_assignments(override_args)?;
    let config = build_config(confidence_constant);

    let service = ProcessingService::new(config)?;
    let result = service.rate_paste(&raw, &overrides);

    if json {
        println!("{}", report::render_json(&result)?);
    } else {
        print!("{}", report::render_table(&result));
    }
    Ok(())
}

pub fn handle_extract(file: Option<&Path>, json: bool) -> Result<()> {
    let raw = read_paste(file)?;

    let service = ProcessingService::new(AppConfig::new())?;
    let extracted = service.extract(&raw);

    if json {
        println!("{}", report::render_extracted_json(&extracted)?);
    } else {
        print!("{}", report::render_extracted(&extracted));
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_config(confidence_constant: Option<f64>) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(k) = confidence_constant {
        config.rating.confidence_constant = k;
    }
    config
}

fn read_paste(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read paste from {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read paste from stdin")?;
            Ok(raw)
        }
    }
}
