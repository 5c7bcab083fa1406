//! svgdelta CLI
//!
//! Compares paired SVG renderings structurally and ranks the pairs by divergence.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "svgdelta", version)]
#[command(about = "Structural (non-pixel) diff of paired SVG renderings", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare one pair and print its detail report
    Compare(commands::compare::CompareArgs),
    /// Discover every pair in a directory, rank them and write reports
    Batch(commands::batch::BatchArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Batch(args) => commands::batch::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
