use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::file_store::{FileStore, FileStoreError};

#[derive(Default)]
pub struct MemoryFileStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryFileStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let files = entries
            .iter()
            .map(|(path, body)| (PathBuf::from(path), body.as_bytes().to_vec()))
            .collect();
        Self {
            files: Mutex::new(files),
        }
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(Path::new(path))
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, FileStoreError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| FileStoreError::NotFound(path.to_path_buf()))
    }

    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}
