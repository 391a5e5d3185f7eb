use std::path::Path;

use crate::application::ports::file_store::FileStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyDirection {
    LeftToRight,
    RightToLeft,
}

pub struct ApplyChanges<'a, F>
where
    F: FileStore + ?Sized,
{
    pub files: &'a F,
}

impl<'a, F> ApplyChanges<'a, F>
where
    F: FileStore + ?Sized,
{
    /// Overwrites one side with the full contents of the other.
    pub async fn execute(
        &self,
        left_path: &Path,
        right_path: &Path,
        direction: ApplyDirection,
    ) -> anyhow::Result<()> {
        let (source, target) = match direction {
            ApplyDirection::LeftToRight => (left_path, right_path),
            ApplyDirection::RightToLeft => (right_path, left_path),
        };
        let bytes = self.files.read_bytes(source).await?;
        self.files.write_bytes(target, &bytes).await?;
        tracing::info!(
            source = %source.display(),
            target = %target.display(),
            bytes = bytes.len(),
            "changes_applied"
        );
        Ok(())
    }
}
