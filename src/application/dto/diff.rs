use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Equal,
    Delete,
    Insert,
}

/// A contiguous run of text the diff provider classified as unchanged,
/// removed from the left text, or inserted into the right text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Insert, text)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineClassification {
    Same,
    Added,
    Removed,
}

impl LineClassification {
    pub fn as_str(self) -> &'static str {
        match self {
            LineClassification::Same => "same",
            LineClassification::Added => "added",
            LineClassification::Removed => "removed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub line_number: u32,
    pub content: String,
    pub classification: LineClassification,
}

impl DiffLine {
    pub fn new(line_number: u32, content: &str, classification: LineClassification) -> Self {
        Self {
            line_number,
            content: content.to_string(),
            classification,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub left_lines: Vec<DiffLine>,
    pub right_lines: Vec<DiffLine>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffResult {
    pub fn summary(&self) -> DiffSummary {
        let count = |lines: &[DiffLine], class: LineClassification| {
            lines.iter().filter(|l| l.classification == class).count()
        };
        DiffSummary {
            added: count(&self.right_lines, LineClassification::Added),
            removed: count(&self.left_lines, LineClassification::Removed),
            unchanged: count(&self.left_lines, LineClassification::Same),
        }
    }

    /// True when neither side carries an added or removed line.
    pub fn is_identical(&self) -> bool {
        let summary = self.summary();
        summary.added == 0 && summary.removed == 0
    }
}
