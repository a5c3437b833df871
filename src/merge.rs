use crate::Issue;

/// Reconcile issue lists from two checker backends into one.
///
/// The primary backend is authoritative: any secondary issue whose
/// span overlaps a primary span is dropped, whatever its kind.
/// Secondary issues disjoint from every primary span are kept
/// verbatim. Output order is all primary issues first, then the
/// surviving secondary issues, each in their original order.
pub fn merge_issues(primary: &[Issue], secondary: &[Issue]) -> Vec<Issue> {
    let mut merged: Vec<Issue> = primary.to_vec();

    // Issue counts per call are small, so the quadratic scan is fine.
    for issue in secondary {
        if primary.iter().all(|p| !p.span.overlaps(&issue.span)) {
            merged.push(issue.clone());
        }
    }

    merged
}
