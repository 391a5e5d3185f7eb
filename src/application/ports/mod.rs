pub mod file_store;
pub mod span_diff;
