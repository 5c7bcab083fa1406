use crate::delta::{DeltaReport, SeverityWeights};
use crate::fingerprint::Fingerprint;
use crate::rank::rank_by_severity;

fn report(name: &str, severity: f64) -> DeltaReport {
    let empty = Fingerprint::default();
    DeltaReport {
        severity,
        ..DeltaReport::compute(name, &empty, &empty, &SeverityWeights::default())
    }
}

#[test]
fn ranks_descending_and_keeps_discovery_order_for_ties() {
    let mut reports = vec![
        report("a", 1.0),
        report("b", 3.0),
        report("c", 3.0),
        report("d", 0.0),
        report("e", 3.0),
    ];
    rank_by_severity(&mut reports);
    let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["b", "c", "e", "a", "d"]);
}

#[test]
fn ranking_empty_is_a_no_op() {
    let mut reports: Vec<DeltaReport> = Vec::new();
    rank_by_severity(&mut reports);
    assert!(reports.is_empty());
}
