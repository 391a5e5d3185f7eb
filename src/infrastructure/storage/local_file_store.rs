use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::application::ports::file_store::{FileStore, FileStoreError};

/// File store over the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

/// Fills a temp file beside `path` and renames it over `path`. On any error
/// the temp file is removed and `path` keeps its previous contents.
fn replace_file<W>(path: &Path, fill: W) -> io::Result<()>
where
    W: FnOnce(&mut File) -> io::Result<()>,
{
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)?;
    fill(tmp.as_file_mut())?;
    if let Some(perms) = target_permissions(path)? {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn target_permissions(path: &Path) -> io::Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, FileStoreError> {
        tokio::fs::read(path)
            .await
            .map_err(|e| FileStoreError::from_io(path, e))
    }

    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError> {
        let target: PathBuf = path.to_path_buf();
        let data = bytes.to_vec();
        tokio::task::spawn_blocking(move || replace_file(&target, |file| file.write_all(&data)))
            .await
            .map_err(|e| FileStoreError::from_io(path, io::Error::other(e)))?
            .map_err(|e| FileStoreError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "file_written");
        Ok(())
    }
}
