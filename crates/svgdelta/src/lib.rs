#![forbid(unsafe_code)]

//! Structural diff of two SVG renderings of the same diagram.
//!
//! Instead of comparing pixels, each document is reduced to a [`Fingerprint`]: multisets of element
//! tags, attribute presence, normalized attribute values and text content, plus the root
//! width/height/viewBox. Two fingerprints are compared into a [`DeltaReport`] whose severity score
//! is used to rank many pairs.
//!
//! Design goals:
//! - numeric precision noise does not count as divergence
//! - deterministic outputs (stable ordering everywhere, including ties)
//! - no global state: output locations come from an explicit [`DeltaConfig`]

pub mod batch;
pub mod config;
pub mod counter;
pub mod delta;
pub mod detail;
pub mod error;
pub mod fingerprint;
pub mod key;
pub mod normalize;
pub mod pairs;
pub mod rank;
pub mod report;

pub use batch::{BatchOutcome, compare_pair, load_fingerprint, run_batch};
pub use config::{DeltaConfig, FailurePolicy, RendererLabels, ReportPaths};
pub use counter::Multiset;
pub use delta::{DeltaReport, SeverityWeights};
pub use detail::{DetailOptions, render_detail};
pub use error::{Error, Result};
pub use fingerprint::{Fingerprint, ViewBox};
pub use normalize::normalize_attr_value;
pub use pairs::{DocumentPair, discover_pairs};
pub use rank::rank_by_severity;
pub use report::{DeltaRow, PairFailure};

/// Both fingerprints of one pair together with their comparison.
#[derive(Debug, Clone)]
pub struct PairComparison {
    pub name: String,
    pub c: Fingerprint,
    pub g: Fingerprint,
    pub report: DeltaReport,
}

impl PairComparison {
    pub fn detail(&self, opts: &DetailOptions<'_>) -> String {
        render_detail(&self.name, &self.c, &self.g, opts)
    }
}

pub fn compare_fingerprints(
    name: impl Into<String>,
    c: Fingerprint,
    g: Fingerprint,
    weights: &SeverityWeights,
) -> PairComparison {
    let name = name.into();
    let report = DeltaReport::compute(name.clone(), &c, &g, weights);
    PairComparison { name, c, g, report }
}

/// Compares two parsed documents (renderer C, renderer G) under the pair name `name`.
pub fn compare_documents(
    name: impl Into<String>,
    c: &roxmltree::Document<'_>,
    g: &roxmltree::Document<'_>,
    weights: &SeverityWeights,
) -> PairComparison {
    compare_fingerprints(
        name,
        Fingerprint::from_document(c),
        Fingerprint::from_document(g),
        weights,
    )
}

/// Parses and compares two SVG sources. Either document failing to parse is an error.
pub fn compare_svg_str(
    name: impl Into<String>,
    c_svg: &str,
    g_svg: &str,
    weights: &SeverityWeights,
) -> Result<PairComparison> {
    let name = name.into();
    let parse = |side: &str, svg: &str| {
        Fingerprint::from_svg_str(svg).map_err(|source| Error::ParseDocument {
            path: format!("{name} ({side})"),
            source,
        })
    };
    let c = parse("c", c_svg)?;
    let g = parse("g", g_svg)?;
    Ok(compare_fingerprints(name, c, g, weights))
}

#[cfg(test)]
mod tests;
