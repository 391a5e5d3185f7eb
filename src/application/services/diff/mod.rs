pub mod annotate;
pub mod text_diff;
