use std::sync::Arc;

use crate::application::ports::file_store::FileStore;
use crate::application::ports::span_diff::SpanDiffProvider;
use crate::application::services::diff::text_diff::SimilarSpanDiff;
use crate::bootstrap::config::Config;
use crate::infrastructure::storage::local_file_store::LocalFileStore;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Arc<Config>,
    files: Arc<dyn FileStore>,
    differ: Arc<dyn SpanDiffProvider>,
}

impl AppContext {
    pub fn new(cfg: Config, files: Arc<dyn FileStore>, differ: Arc<dyn SpanDiffProvider>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            files,
            differ,
        }
    }

    /// Local filesystem store and a `similar` differ tuned from `cfg`.
    pub fn from_config(cfg: Config) -> Self {
        let differ = SimilarSpanDiff::new(cfg.diff_granularity, cfg.diff_timeout);
        Self::new(cfg, Arc::new(LocalFileStore::new()), Arc::new(differ))
    }

    pub fn file_store(&self) -> Arc<dyn FileStore> {
        self.files.clone()
    }

    pub fn span_differ(&self) -> Arc<dyn SpanDiffProvider> {
        self.differ.clone()
    }
}
