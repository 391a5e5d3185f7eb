use crate::application::dto::diff::{DiffLine, DiffResult, LineClassification, Span, SpanKind};

/// Lines contributed by a span's text. A final empty segment left by a
/// trailing newline is not a line, so empty text yields nothing.
pub fn span_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    let skip_all = text.is_empty();
    body.split('\n').filter(move |_| !skip_all)
}

/// Turns an ordered span sequence into two independently numbered line lists,
/// one per side. Equal spans advance both counters, Delete only the left one,
/// Insert only the right one.
pub fn annotate(spans: &[Span]) -> DiffResult {
    let mut left_line = 1u32;
    let mut right_line = 1u32;
    let mut left_lines = Vec::new();
    let mut right_lines = Vec::new();

    for span in spans {
        for line in span_lines(&span.text) {
            match span.kind {
                SpanKind::Equal => {
                    left_lines.push(DiffLine::new(left_line, line, LineClassification::Same));
                    right_lines.push(DiffLine::new(right_line, line, LineClassification::Same));
                    left_line += 1;
                    right_line += 1;
                }
                SpanKind::Delete => {
                    left_lines.push(DiffLine::new(left_line, line, LineClassification::Removed));
                    left_line += 1;
                }
                SpanKind::Insert => {
                    right_lines.push(DiffLine::new(right_line, line, LineClassification::Added));
                    right_line += 1;
                }
            }
        }
    }

    DiffResult {
        left_lines,
        right_lines,
    }
}
