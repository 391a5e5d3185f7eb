use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::application::dto::diff::DiffResult;
use crate::application::ports::file_store::FileStore;
use crate::application::ports::span_diff::SpanDiffProvider;
use crate::application::services::diff::text_diff::compute_text_diff;

pub struct CompareFiles<'a, F, D>
where
    F: FileStore + ?Sized,
    D: SpanDiffProvider + ?Sized + 'static,
{
    pub files: &'a F,
    pub differ: Arc<D>,
}

impl<'a, F, D> CompareFiles<'a, F, D>
where
    F: FileStore + ?Sized,
    D: SpanDiffProvider + ?Sized + 'static,
{
    pub async fn execute(&self, left_path: &Path, right_path: &Path) -> anyhow::Result<DiffResult> {
        let left_bytes = self.files.read_bytes(left_path).await?;
        let right_bytes = self.files.read_bytes(right_path).await?;

        let left = String::from_utf8_lossy(&left_bytes).into_owned();
        let right = String::from_utf8_lossy(&right_bytes).into_owned();

        let differ = self.differ.clone();
        let result = tokio::task::spawn_blocking(move || {
            compute_text_diff(differ.as_ref(), &left, &right)
        })
        .await
        .context("diff_task_join")?;

        let summary = result.summary();
        tracing::debug!(
            left = %left_path.display(),
            right = %right_path.display(),
            added = summary.added,
            removed = summary.removed,
            unchanged = summary.unchanged,
            "files_compared"
        );
        Ok(result)
    }
}
