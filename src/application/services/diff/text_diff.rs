use std::time::Duration;

use similar::{Algorithm, ChangeTag, TextDiff};

use crate::application::dto::diff::{DiffResult, Span, SpanKind};
use crate::application::ports::span_diff::SpanDiffProvider;
use crate::application::services::diff::annotate::annotate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffGranularity {
    #[default]
    Chars,
    Lines,
}

impl DiffGranularity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chars" | "char" => Some(DiffGranularity::Chars),
            "lines" | "line" => Some(DiffGranularity::Lines),
            _ => None,
        }
    }
}

/// Deadline applied when none is configured. Past it, `similar` settles for
/// a coarser but still valid diff.
pub const DEFAULT_DIFF_TIMEOUT: Duration = Duration::from_millis(1000);

/// Myers diff from `similar`, folded into maximal spans.
#[derive(Debug, Clone)]
pub struct SimilarSpanDiff {
    granularity: DiffGranularity,
    timeout: Option<Duration>,
}

impl SimilarSpanDiff {
    pub fn new(granularity: DiffGranularity, timeout: Option<Duration>) -> Self {
        Self {
            granularity,
            timeout,
        }
    }
}

impl Default for SimilarSpanDiff {
    fn default() -> Self {
        Self::new(DiffGranularity::default(), Some(DEFAULT_DIFF_TIMEOUT))
    }
}

impl SpanDiffProvider for SimilarSpanDiff {
    fn diff(&self, left: &str, right: &str) -> Vec<Span> {
        let mut config = TextDiff::configure();
        config.algorithm(Algorithm::Myers);
        if let Some(timeout) = self.timeout {
            config.timeout(timeout);
        }
        let diff = match self.granularity {
            DiffGranularity::Chars => config.diff_chars(left, right),
            DiffGranularity::Lines => config.diff_lines(left, right),
        };

        let mut spans: Vec<Span> = Vec::new();
        for op in diff.ops() {
            for change in diff.iter_changes(op) {
                let kind = match change.tag() {
                    ChangeTag::Equal => SpanKind::Equal,
                    ChangeTag::Delete => SpanKind::Delete,
                    ChangeTag::Insert => SpanKind::Insert,
                };
                match spans.last_mut() {
                    Some(last) if last.kind == kind => last.text.push_str(change.value()),
                    _ => spans.push(Span::new(kind, change.value())),
                }
            }
        }
        spans
    }
}

pub fn compute_text_diff<D>(differ: &D, left: &str, right: &str) -> DiffResult
where
    D: SpanDiffProvider + ?Sized,
{
    let spans = differ.diff(left, right);
    annotate(&spans)
}
