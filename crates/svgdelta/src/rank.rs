//! Severity ranking across pairs.

use crate::delta::DeltaReport;

/// Sorts `reports` by severity, most divergent first.
///
/// The sort is stable: pairs with equal severity keep their discovery order.
pub fn rank_by_severity(reports: &mut [DeltaReport]) {
    reports.sort_by(|a, b| b.severity.total_cmp(&a.severity));
}
