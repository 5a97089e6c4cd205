use feedfix_types::issue::Issue;

/// Explicit issue accumulator threaded through the rule pipeline.
///
/// Rules only ever append; ordering and the uniqueness invariant are
/// applied once in [`finish`](IssueAccumulator::finish), so no rule can
/// observe or depend on another rule's output.
#[derive(Debug, Default)]
pub struct IssueAccumulator {
    issues: Vec<Issue>,
}

impl IssueAccumulator {
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Sort (file-level first, then row order) and collapse duplicates on
    /// `(severity, code, row, column)`.
    pub fn finish(mut self) -> Vec<Issue> {
        self.issues.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
        self.issues.dedup_by(|a, b| a.dedup_key() == b.dedup_key());
        self.issues
    }
}

type SortKey<'a> = (bool, usize, Option<&'a str>, &'a str, feedfix_types::issue::Severity);

fn sort_key(issue: &Issue) -> SortKey<'_> {
    (
        issue.row.is_some(),
        issue.row.unwrap_or(0),
        issue.column.as_deref(),
        issue.code.as_str(),
        issue.severity,
    )
}
