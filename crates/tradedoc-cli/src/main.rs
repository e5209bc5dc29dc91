//! CLI for extracting and cross-checking export trade documents.

mod commands;
mod source;
mod tika;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{compare, config, extract};

/// Trade document checker - extract fields from export documents and compare them
#[derive(Parser)]
#[command(name = "tradedoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Text extraction service endpoint (overrides the config file)
    #[arg(long, global = true, env = "TIKA_URL")]
    tika_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the fields of a single document
    Extract(extract::ExtractArgs),

    /// Extract several documents and compare them field by field
    Compare(compare::CompareArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

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
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let tika_url = cli.tika_url.as_deref();

    match cli.command {
        Commands::Extract(args) => extract::run(args, cli.config.as_deref(), tika_url).await,
        Commands::Compare(args) => compare::run(args, cli.config.as_deref(), tika_url).await,
        Commands::Config(args) => config::run(args, cli.config.as_deref()).await,
    }
}
