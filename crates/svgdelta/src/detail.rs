//! Human-readable per-pair detail report.
//!
//! The output is deterministic: every section is sorted, and only the attribute-presence section is
//! truncated (its key space can be large).

use crate::config::RendererLabels;
use crate::counter::CountDiff;
use crate::fingerprint::{Fingerprint, fmt_view_box};
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct DetailOptions<'a> {
    pub labels: &'a RendererLabels,
    /// Maximum attribute-presence rows, largest absolute difference first.
    pub attr_limit: usize,
    /// Source documents (C, G), listed in the header when known.
    pub sources: Option<(&'a Path, &'a Path)>,
}

fn fmt_dim(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v}"),
        None => "-".to_string(),
    }
}

fn write_row(out: &mut String, key: &str, d: &CountDiff<'_, impl Sized>, labels: &RendererLabels) {
    let _ = writeln!(
        out,
        "  {key}: {}={} {}={} delta={}",
        labels.c,
        d.a,
        labels.g,
        d.b,
        d.signed()
    );
}

/// Renders the detail report for the pair `name` (renderer C fingerprint `c`, renderer G `g`).
pub fn render_detail(
    name: &str,
    c: &Fingerprint,
    g: &Fingerprint,
    opts: &DetailOptions<'_>,
) -> String {
    let labels = opts.labels;
    let mut out = String::new();

    let _ = writeln!(&mut out, "name={name}");
    if let Some((c_path, g_path)) = opts.sources {
        let _ = writeln!(&mut out, "{}={}", labels.c, c_path.display());
        let _ = writeln!(&mut out, "{}={}", labels.g, g_path.display());
    }
    let _ = writeln!(&mut out);

    let _ = writeln!(
        &mut out,
        "root_width:  {}={} {}={}",
        labels.c,
        fmt_dim(c.root_width),
        labels.g,
        fmt_dim(g.root_width)
    );
    let _ = writeln!(
        &mut out,
        "root_height: {}={} {}={}",
        labels.c,
        fmt_dim(c.root_height),
        labels.g,
        fmt_dim(g.root_height)
    );
    let _ = writeln!(
        &mut out,
        "root_viewBox: {}={} {}={}",
        labels.c,
        fmt_view_box(c.root_view_box.as_ref()),
        labels.g,
        fmt_view_box(g.root_view_box.as_ref())
    );
    let _ = writeln!(&mut out);

    let _ = writeln!(&mut out, "element_count_delta:");
    for d in c.element_counts.differing(&g.element_counts) {
        write_row(&mut out, d.key, &d, labels);
    }
    let _ = writeln!(&mut out);

    let _ = writeln!(
        &mut out,
        "attribute_presence_delta (top {} by abs delta):",
        opts.attr_limit
    );
    let mut presence = c.attr_presence.differing(&g.attr_presence);
    // `differing` is key-ascending and the sort is stable, so ties stay in key order.
    presence.sort_by(|a, b| b.abs().cmp(&a.abs()));
    for d in presence.iter().take(opts.attr_limit) {
        write_row(&mut out, &d.key.to_string(), d, labels);
    }
    let _ = writeln!(&mut out);

    let _ = writeln!(&mut out, "text_value_delta:");
    for d in c.text_values.differing(&g.text_values) {
        write_row(&mut out, &format!("{:?}", d.key), &d, labels);
    }

    out
}
