//! Read command - OCR a page range into editable text.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use pagemark_core::{ReadEvent, Session};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// First page of the range (1-indexed, inclusive)
    #[arg(short, long)]
    first: u32,

    /// Last page of the range (1-indexed, inclusive)
    #[arg(short, long)]
    last: u32,

    /// Output file for the extracted text (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ReadArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let span = u64::from(args.last.saturating_sub(args.first).saturating_add(1));
    let pb = ProgressBar::new(span);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("Opening PDF...");

    let mut session = Session::new(config);
    session.open(&args.input);

    let handle = session.begin_read(args.first, args.last)?;
    for event in handle.iter() {
        match &event {
            ReadEvent::Started { first, last } => {
                pb.set_message(format!("Reading pages {}-{}", first, last));
            }
            ReadEvent::Page(page) => {
                pb.inc(1);
                pb.set_message(format!("Page {}", page.page));
            }
            _ => {}
        }
        session.apply(event)?;
    }
    pb.finish_with_message("Done");

    if let Some(output_path) = &args.output {
        fs::write(output_path, session.buffer())?;
        println!(
            "{} Extracted text written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", session.buffer());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
