//! Batch driver: compare every pair, rank, then write all reports.

use crate::config::{DeltaConfig, FailurePolicy, ReportPaths};
use crate::delta::{DeltaReport, SeverityWeights};
use crate::detail::DetailOptions;
use crate::error::{Error, Result};
use crate::fingerprint::Fingerprint;
use crate::pairs::DocumentPair;
use crate::rank::rank_by_severity;
use crate::report::{DeltaRow, PairFailure, render_csv, render_json, render_summary};
use crate::{PairComparison, compare_fingerprints};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and fingerprints one document. The file handle is released before this returns.
pub fn load_fingerprint(path: &Path) -> Result<Fingerprint> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadDocument {
        path: path.display().to_string(),
        source,
    })?;
    Fingerprint::from_svg_str(&text).map_err(|source| Error::ParseDocument {
        path: path.display().to_string(),
        source,
    })
}

pub fn compare_pair(pair: &DocumentPair, weights: &SeverityWeights) -> Result<PairComparison> {
    let c = load_fingerprint(&pair.c_path)?;
    let g = load_fingerprint(&pair.g_path)?;
    Ok(compare_fingerprints(pair.name.clone(), c, g, weights))
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Severity-descending.
    pub reports: Vec<DeltaReport>,
    /// Same order as `reports`.
    pub rows: Vec<DeltaRow>,
    pub failures: Vec<PairFailure>,
    pub paths: ReportPaths,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::WriteReport {
        path: path.display().to_string(),
        source,
    })
}

/// Compares every pair, ranks the results and writes the CSV, summary, JSON and detail reports
/// under `config.out_dir`. Nothing is written until every pair has been compared.
pub fn run_batch(pairs: &[DocumentPair], config: &DeltaConfig) -> Result<BatchOutcome> {
    if pairs.is_empty() {
        return Err(Error::NoPairs {
            c: config.renderers.c.clone(),
            g: config.renderers.g.clone(),
        });
    }

    let paths = config.report_paths();
    tracing::info!(
        pairs = pairs.len(),
        out_dir = %config.out_dir.display(),
        "comparing svg pairs"
    );

    let mut reports: Vec<DeltaReport> = Vec::with_capacity(pairs.len());
    let mut details: Vec<(PathBuf, String)> = Vec::with_capacity(pairs.len());
    let mut failures: Vec<PairFailure> = Vec::new();

    for pair in pairs {
        let cmp = match compare_pair(pair, &config.weights) {
            Ok(v) => v,
            Err(err) => match config.failure_policy {
                FailurePolicy::Abort => return Err(err),
                FailurePolicy::Isolate => {
                    tracing::warn!(name = %pair.name, error = %err, "pair comparison failed");
                    failures.push(PairFailure {
                        name: pair.name.clone(),
                        message: err.to_string(),
                    });
                    continue;
                }
            },
        };
        tracing::debug!(
            name = %cmp.name,
            severity = cmp.report.severity,
            tag_delta = cmp.report.tag_delta,
            text_delta = cmp.report.text_delta,
            "compared pair"
        );

        let detail = cmp.detail(&DetailOptions {
            labels: &config.renderers,
            attr_limit: config.detail_attr_limit,
            sources: Some((pair.c_path.as_path(), pair.g_path.as_path())),
        });
        details.push((paths.detail(&cmp.name), detail));
        reports.push(cmp.report);
    }

    rank_by_severity(&mut reports);
    let rows: Vec<DeltaRow> = reports.iter().map(|r| DeltaRow::new(r, &paths)).collect();

    fs::create_dir_all(&paths.details_dir).map_err(|source| Error::WriteReport {
        path: paths.details_dir.display().to_string(),
        source,
    })?;
    for (path, text) in &details {
        write_file(path, text)?;
    }
    write_file(&paths.csv, &render_csv(&rows, &config.renderers))?;
    write_file(&paths.json, &render_json(&rows, &failures)?)?;
    write_file(
        &paths.summary,
        &render_summary(&rows, &failures, &paths, config.summary_limit),
    )?;

    tracing::info!(
        compared = rows.len(),
        failed = failures.len(),
        summary = %paths.summary.display(),
        "wrote svg delta reports"
    );

    Ok(BatchOutcome {
        reports,
        rows,
        failures,
        paths,
    })
}
