use crate::config::{RendererLabels, ReportPaths};
use crate::delta::{DeltaReport, SeverityWeights};
use crate::fingerprint::Fingerprint;
use crate::report::*;
use std::path::Path;

fn row(name: &str, c: &str, g: &str) -> DeltaRow {
    let r = DeltaReport::compute(
        name,
        &Fingerprint::from_svg_str(c).unwrap(),
        &Fingerprint::from_svg_str(g).unwrap(),
        &SeverityWeights::default(),
    );
    DeltaRow::new(&r, &ReportPaths::new(Path::new("out")))
}

#[test]
fn row_formats_fixed_precision_fields() {
    let r = row(
        "flow",
        r#"<svg width="10" viewBox="0 0 10 5"><g/></svg>"#,
        r#"<svg width="12.5"><g/><g/></svg>"#,
    );
    assert_eq!(r.tag_delta, 1);
    assert_eq!(r.tag_similarity, "0.6667");
    assert_eq!(r.text_similarity, "1.0000");
    assert_eq!(r.width_delta, "2.500");
    assert_eq!(r.c_viewbox, "0.000,0.000,10.000,5.000");
    assert_eq!(r.g_viewbox, "-");
    assert_eq!(
        r.detail_path,
        Path::new("out").join("details").join("flow.txt").display().to_string()
    );
}

#[test]
fn csv_has_fixed_header_and_quotes_view_boxes() {
    let rows = vec![row(
        "flow",
        r#"<svg viewBox="0 0 10 5"/>"#,
        r#"<svg/>"#,
    )];
    let csv = render_csv(&rows, &RendererLabels::default());
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "name,tag_delta,attr_presence_delta,attr_values_delta,text_delta,tag_similarity,\
             text_similarity,width_delta,height_delta,mmdc_viewbox,mmdg_viewbox,detail_path"
        )
    );
    let line = lines.next().unwrap();
    assert!(
        line.starts_with("flow,0,1,1,0,1.0000,1.0000,0.000,0.000,\"0.000,0.000,10.000,5.000\",-,"),
        "{line}"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn csv_escapes_quotes_in_names() {
    let rows = vec![row("say \"hi\"", "<svg/>", "<svg/>")];
    let csv = render_csv(&rows, &RendererLabels::default());
    assert!(csv.lines().nth(1).unwrap().starts_with("\"say \"\"hi\"\"\",0,"));
}

#[test]
fn summary_lists_only_the_top_rows() {
    let rows = vec![
        row("worst", "<svg><g/><g/></svg>", "<svg/>"),
        row("mid", "<svg><g/></svg>", "<svg/>"),
        row("same", "<svg/>", "<svg/>"),
    ];
    let paths = ReportPaths::new(Path::new("out"));
    let summary = render_summary(&rows, &[], &paths, 2);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "pairs=3");
    assert_eq!(lines[1], format!("csv={}", paths.csv.display()));
    assert_eq!(lines[2], format!("details_dir={}", paths.details_dir.display()));
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "top_deltas:");
    assert_eq!(
        lines[5],
        "  worst: tag_delta=2 attr_presence_delta=0 attr_values_delta=0 text_delta=0 \
         tag_similarity=0.3333 text_similarity=1.0000"
    );
    assert!(lines[6].starts_with("  mid: "));
    assert_eq!(lines.len(), 7);
    assert!(!summary.contains("failures="));
}

#[test]
fn summary_reports_isolated_failures() {
    let failures = vec![PairFailure {
        name: "broken".to_string(),
        message: "bad xml".to_string(),
    }];
    let summary = render_summary(&[], &failures, &ReportPaths::new(Path::new("o")), 10);
    assert!(summary.starts_with("pairs=0\n"));
    assert!(summary.ends_with("failures=1\n  broken: bad xml\n"));
}

#[test]
fn json_report_carries_rows_and_failures() {
    let rows = vec![row("a", "<svg/>", "<svg><g/></svg>")];
    let failures = vec![PairFailure {
        name: "b".to_string(),
        message: "oops".to_string(),
    }];
    let json = render_json(&rows, &failures).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["pairs"][0]["name"], "a");
    assert_eq!(v["pairs"][0]["tag_delta"], 1);
    assert_eq!(v["pairs"][0]["tag_similarity"], "0.5000");
    assert_eq!(v["failures"][0]["message"], "oops");
}
