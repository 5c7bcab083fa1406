//! Per-pair deltas, similarities and the composite severity score.

use crate::fingerprint::{Fingerprint, ViewBox};
use serde::{Deserialize, Serialize};

/// Weights of the composite severity score. Structural terms (tags, text) dominate; attribute
/// value drift is mostly cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityWeights {
    pub tag: f64,
    pub attr_presence: f64,
    pub attr_values: f64,
    pub text: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            tag: 4.0,
            attr_presence: 1.5,
            attr_values: 0.2,
            text: 3.0,
            width: 0.1,
            height: 0.1,
        }
    }
}

impl SeverityWeights {
    /// Weighted sum of the six delta terms of `r`. Higher means more divergent.
    pub fn score(&self, r: &DeltaReport) -> f64 {
        r.tag_delta as f64 * self.tag
            + r.attr_presence_delta as f64 * self.attr_presence
            + r.attr_values_delta as f64 * self.attr_values
            + r.text_delta as f64 * self.text
            + r.width_delta * self.width
            + r.height_delta * self.height
    }
}

/// `|a − b|`, or `0.0` when either side is absent.
pub fn dimension_delta(a: Option<f64>, b: Option<f64>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => (a - b).abs(),
        _ => 0.0,
    }
}

/// Everything measured for one pair. Computed once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeltaReport {
    pub name: String,
    pub tag_delta: usize,
    pub attr_presence_delta: usize,
    pub attr_values_delta: usize,
    pub text_delta: usize,
    pub tag_similarity: f64,
    pub text_similarity: f64,
    pub width_delta: f64,
    pub height_delta: f64,
    pub c_view_box: Option<ViewBox>,
    pub g_view_box: Option<ViewBox>,
    pub severity: f64,
}

impl DeltaReport {
    /// Compares the renderer-C fingerprint `c` against the renderer-G fingerprint `g`.
    pub fn compute(
        name: impl Into<String>,
        c: &Fingerprint,
        g: &Fingerprint,
        weights: &SeverityWeights,
    ) -> Self {
        let mut report = Self {
            name: name.into(),
            tag_delta: c.element_counts.abs_delta(&g.element_counts),
            attr_presence_delta: c.attr_presence.abs_delta(&g.attr_presence),
            attr_values_delta: c.attr_values.abs_delta(&g.attr_values),
            text_delta: c.text_values.abs_delta(&g.text_values),
            tag_similarity: c.element_counts.jaccard(&g.element_counts),
            text_similarity: c.text_values.jaccard(&g.text_values),
            width_delta: dimension_delta(c.root_width, g.root_width),
            height_delta: dimension_delta(c.root_height, g.root_height),
            c_view_box: c.root_view_box,
            g_view_box: g.root_view_box,
            severity: 0.0,
        };
        report.severity = weights.score(&report);
        report
    }
}
