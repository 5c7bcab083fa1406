use crate::error::CliError;
use clap::Args;
use std::io::Write as _;
use std::path::PathBuf;
use svgdelta::{FailurePolicy, discover_pairs, run_batch};

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Directory holding `<name>_<C>.svg` / `<name>_<G>.svg` pairs
    #[arg(long, default_value = "/tmp")]
    pub dir: PathBuf,

    /// Report root (overrides the config file)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON or YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report unreadable or malformed pairs instead of aborting
    #[arg(long)]
    pub isolate_failures: bool,
}

pub fn execute(args: BatchArgs) -> Result<(), CliError> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(out) = args.out {
        config.out_dir = out;
    }
    if args.isolate_failures {
        config.failure_policy = FailurePolicy::Isolate;
    }

    let pairs = discover_pairs(&args.dir, &config.renderers)?;
    tracing::info!(dir = %args.dir.display(), pairs = pairs.len(), "discovered svg pairs");
    let outcome = run_batch(&pairs, &config)?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", outcome.paths.summary.display())?;
    writeln!(out, "{}", outcome.paths.csv.display())?;
    Ok(())
}
