//! Engine command - inspect the external OCR engine.

use clap::{Args, Subcommand};
use console::style;

use pagemark_core::TesseractEngine;

/// Arguments for the engine command.
#[derive(Args)]
pub struct EngineArgs {
    #[command(subcommand)]
    command: EngineCommand,
}

#[derive(Subcommand)]
enum EngineCommand {
    /// Check that the configured OCR binary is usable
    Check,
}

pub async fn run(args: EngineArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        EngineCommand::Check => check(config_path),
    }
}

fn check(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    println!("Engine path: {}", config.ocr.engine_path.display());
    println!("Languages:   {}", config.ocr.language_spec());

    let engine = match TesseractEngine::from_config(&config.ocr) {
        Ok(engine) => engine,
        Err(err) => {
            println!("Status:      {}", style("missing").red());
            println!("Error:       {}", err);
            anyhow::bail!("OCR engine check failed");
        }
    };

    match engine.version() {
        Ok(version) => {
            println!("Status:      {}", style("ok").green());
            println!("Version:     {}", version);
            Ok(())
        }
        Err(err) => {
            println!("Status:      {}", style("unusable").red());
            println!("Error:       {}", err);
            anyhow::bail!("OCR engine check failed");
        }
    }
}
