pub mod cli;
pub mod config;
pub mod line;
pub mod merge;
pub mod preview;
pub mod report;
pub mod ui;

pub use config::Config;
pub use line::at_cursor;
pub use merge::merge_issues;

use serde::{Deserialize, Serialize};

/// Half-open interval `[start, end)` over UTF-16 code unit offsets.
///
/// Offsets count UTF-16 code units because that is how the host text
/// widget addresses its buffer; spans received from checker backends
/// and spans handed back for line replacement share this convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True if this span shares at least one offset with `other`.
    /// Touching spans (one's end equals the other's start) do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Spelling,
    Grammar,
    Style,
}

impl IssueKind {
    /// Label shown in tooltips and panel headers.
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::Spelling => "Spelling",
            IssueKind::Grammar => "Grammar",
            IssueKind::Style => "Style",
        }
    }
}

/// A flagged span of text produced by a checker backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub word: String,
    #[serde(flatten)]
    pub span: Span,
    pub kind: IssueKind,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// The line under the cursor.
///
/// `text` carries the content with its terminator stripped; `range`
/// includes the terminator so the whole line can be replaced in one
/// edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLine {
    pub text: String,
    pub range: Span,
}
