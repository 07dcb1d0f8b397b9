use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod detex;

#[derive(Parser)]
#[command(version, about = "Strip TeX markup from documents to approximate plain text")]
struct Args {
    /// Log pipeline diagnostics to stderr
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    command: DetexCommand,
}

#[derive(Parser)]
struct StripArgs {
    /// TeX files, or directories to search for .tex files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Warn when less than this fraction of a file remains (0.0 to 1.0)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Strip and check files without writing any output
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Parser)]
struct SortArgs {
    /// TeX files, or directories to search for .tex files
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum DetexCommand {
    /// Strip markup and write a _betterdetex.txt file next to each input
    Strip(StripArgs),

    /// Print the inputs in chapter order
    Sort(SortArgs),

    /// List the rewrite stages in the order they run
    Rules,
}

/// Initialize tracing on stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let default = if verbose { "betterdetex=debug" } else { "betterdetex=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        DetexCommand::Strip(args) => {
            commands::strip::run(&args).await?;
        }
        DetexCommand::Sort(args) => {
            commands::sort::run(&args)?;
        }
        DetexCommand::Rules => {
            commands::rules::run();
        }
    }

    Ok(())
}
