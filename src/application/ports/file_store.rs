use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileStoreError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileStoreError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileStoreError::PermissionDenied(path.to_path_buf()),
            _ => FileStoreError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, FileStoreError>;

    /// Replaces the whole file, creating it when missing.
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError>;
}
