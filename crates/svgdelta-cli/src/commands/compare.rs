use crate::error::CliError;
use clap::Args;
use std::io::Write as _;
use std::path::PathBuf;
use svgdelta::{DetailOptions, DocumentPair, compare_pair};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Document produced by renderer C
    pub c: PathBuf,

    /// Document produced by renderer G
    pub g: PathBuf,

    /// Pair name (defaults to the file stem of the C document)
    #[arg(long)]
    pub name: Option<String>,

    /// JSON or YAML config (renderer labels, weights, limits)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn execute(args: CompareArgs) -> Result<(), CliError> {
    let config = super::load_config(args.config.as_deref())?;
    let name = args.name.unwrap_or_else(|| {
        args.c
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("pair")
            .to_string()
    });
    let pair = DocumentPair {
        name,
        c_path: args.c,
        g_path: args.g,
    };

    let cmp = compare_pair(&pair, &config.weights)?;
    let detail = cmp.detail(&DetailOptions {
        labels: &config.renderers,
        attr_limit: config.detail_attr_limit,
        sources: Some((pair.c_path.as_path(), pair.g_path.as_path())),
    });

    let r = &cmp.report;
    let mut out = std::io::stdout().lock();
    write!(out, "{detail}")?;
    writeln!(out)?;
    writeln!(
        out,
        "severity={:.3} tag_delta={} attr_presence_delta={} attr_values_delta={} text_delta={} \
         tag_similarity={:.4} text_similarity={:.4}",
        r.severity,
        r.tag_delta,
        r.attr_presence_delta,
        r.attr_values_delta,
        r.text_delta,
        r.tag_similarity,
        r.text_similarity
    )?;
    Ok(())
}
