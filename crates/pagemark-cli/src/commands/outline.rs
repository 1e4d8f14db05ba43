//! Outline command - write edited text back as PDF outline entries.

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;

use clap::Args;
use console::style;

use pagemark_core::{Session, open_in_viewer};

/// Arguments for the outline command.
#[derive(Args)]
pub struct OutlineArgs {
    /// Source PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Edited text file, one outline title per line (default: stdin)
    #[arg(short, long)]
    text: Option<PathBuf>,

    /// Destination page for every outline entry (1-indexed)
    #[arg(long)]
    target_page: Option<u32>,

    /// Open the written PDF in the platform's default viewer
    #[arg(long)]
    open: bool,
}

pub async fn run(args: OutlineArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;

    if let Some(page) = args.target_page {
        config.outline.target_page = page;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let buffer = match &args.text {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let mut session = Session::new(config);
    session.open(&args.input);
    session.set_buffer(buffer);

    let output = session.write_outline()?;

    println!(
        "{} Outline PDF written to {}",
        style("✓").green(),
        output.display()
    );

    if args.open {
        open_in_viewer(&output)?;
    }

    Ok(())
}
