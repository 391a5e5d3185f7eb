use crate::application::dto::diff::Span;

/// Produces the ordered span sequence for a pair of texts. Span order follows
/// position in both texts; concatenating Equal and Delete spans gives back
/// `left`, Equal and Insert spans give back `right`.
pub trait SpanDiffProvider: Send + Sync {
    fn diff(&self, left: &str, right: &str) -> Vec<Span>;
}
