//! Aggregate (tabular), summary and JSON renderings of a ranked batch.

use crate::config::{RendererLabels, ReportPaths};
use crate::delta::DeltaReport;
use crate::fingerprint::fmt_view_box;
use serde::Serialize;
use std::fmt::Write as _;

/// One aggregate row; numeric formatting is fixed here so every output agrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaRow {
    pub name: String,
    pub tag_delta: usize,
    pub attr_presence_delta: usize,
    pub attr_values_delta: usize,
    pub text_delta: usize,
    pub tag_similarity: String,
    pub text_similarity: String,
    pub width_delta: String,
    pub height_delta: String,
    pub c_viewbox: String,
    pub g_viewbox: String,
    pub detail_path: String,
}

impl DeltaRow {
    pub fn new(r: &DeltaReport, paths: &ReportPaths) -> Self {
        Self {
            name: r.name.clone(),
            tag_delta: r.tag_delta,
            attr_presence_delta: r.attr_presence_delta,
            attr_values_delta: r.attr_values_delta,
            text_delta: r.text_delta,
            tag_similarity: format!("{:.4}", r.tag_similarity),
            text_similarity: format!("{:.4}", r.text_similarity),
            width_delta: format!("{:.3}", r.width_delta),
            height_delta: format!("{:.3}", r.height_delta),
            c_viewbox: fmt_view_box(r.c_view_box.as_ref()),
            g_viewbox: fmt_view_box(r.g_view_box.as_ref()),
            detail_path: paths.detail(&r.name).display().to_string(),
        }
    }
}

/// A pair that could not be compared (only produced under `FailurePolicy::Isolate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairFailure {
    pub name: String,
    pub message: String,
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Header + one line per row, in the given (ranked) order.
pub fn render_csv(rows: &[DeltaRow], labels: &RendererLabels) -> String {
    let c_viewbox = format!("{}_viewbox", labels.c);
    let g_viewbox = format!("{}_viewbox", labels.g);
    let header = [
        "name",
        "tag_delta",
        "attr_presence_delta",
        "attr_values_delta",
        "text_delta",
        "tag_similarity",
        "text_similarity",
        "width_delta",
        "height_delta",
        c_viewbox.as_str(),
        g_viewbox.as_str(),
        "detail_path",
    ];

    let mut out = String::new();
    let _ = writeln!(&mut out, "{}", header.map(csv_field).join(","));
    for r in rows {
        let fields = [
            r.name.clone(),
            r.tag_delta.to_string(),
            r.attr_presence_delta.to_string(),
            r.attr_values_delta.to_string(),
            r.text_delta.to_string(),
            r.tag_similarity.clone(),
            r.text_similarity.clone(),
            r.width_delta.clone(),
            r.height_delta.clone(),
            r.c_viewbox.clone(),
            r.g_viewbox.clone(),
            r.detail_path.clone(),
        ];
        let _ = writeln!(
            &mut out,
            "{}",
            fields.iter().map(|f| csv_field(f)).collect::<Vec<_>>().join(",")
        );
    }
    out
}

/// Pair count, output locations, then the `limit` most divergent rows.
pub fn render_summary(
    rows: &[DeltaRow],
    failures: &[PairFailure],
    paths: &ReportPaths,
    limit: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "pairs={}", rows.len());
    let _ = writeln!(&mut out, "csv={}", paths.csv.display());
    let _ = writeln!(&mut out, "details_dir={}", paths.details_dir.display());
    let _ = writeln!(&mut out);
    let _ = writeln!(&mut out, "top_deltas:");
    for r in rows.iter().take(limit) {
        let _ = writeln!(
            &mut out,
            "  {}: tag_delta={} attr_presence_delta={} attr_values_delta={} text_delta={} \
             tag_similarity={} text_similarity={}",
            r.name,
            r.tag_delta,
            r.attr_presence_delta,
            r.attr_values_delta,
            r.text_delta,
            r.tag_similarity,
            r.text_similarity
        );
    }
    if !failures.is_empty() {
        let _ = writeln!(&mut out);
        let _ = writeln!(&mut out, "failures={}", failures.len());
        for f in failures {
            let _ = writeln!(&mut out, "  {}: {}", f.name, f.message);
        }
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    pairs: &'a [DeltaRow],
    failures: &'a [PairFailure],
}

pub fn render_json(rows: &[DeltaRow], failures: &[PairFailure]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(&JsonReport {
        pairs: rows,
        failures,
    })?;
    out.push('\n');
    Ok(out)
}
