use std::path::Path;

use crate::application::ports::file_store::FileStore;

pub struct MergeFiles<'a, F>
where
    F: FileStore + ?Sized,
{
    pub files: &'a F,
}

impl<'a, F> MergeFiles<'a, F>
where
    F: FileStore + ?Sized,
{
    /// Whole-file merge: the revised (right) side wins. Nothing is written
    /// when the right file cannot be read.
    pub async fn execute(
        &self,
        left_path: &Path,
        right_path: &Path,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let merged = self.files.read_bytes(right_path).await?;
        self.files.write_bytes(output_path, &merged).await?;
        tracing::info!(
            left = %left_path.display(),
            right = %right_path.display(),
            output = %output_path.display(),
            "files_merged"
        );
        Ok(())
    }
}
