pub mod apply_changes;
pub mod compare_files;
pub mod merge_files;

#[cfg(test)]
pub(crate) mod test_support;
