//! CLI application for PDF page OCR and outline authoring.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, engine, outline, read};

/// pagemark - OCR a PDF page range, edit the text, write it back as outlines
#[derive(Parser)]
#[command(name = "pagemark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// OCR a page range into editable text
    Read(read::ReadArgs),

    /// Write edited text back as PDF outline entries
    Outline(outline::OutlineArgs),

    /// Inspect the external OCR engine
    Engine(engine::EngineArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Read(args) => read::run(args, cli.config.as_deref()).await,
        Commands::Outline(args) => outline::run(args, cli.config.as_deref()).await,
        Commands::Engine(args) => engine::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args).await,
    }
}
