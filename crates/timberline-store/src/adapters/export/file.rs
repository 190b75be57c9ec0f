//! Filesystem export sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::SinkError;
use crate::ports::outbound::{ExportSink, SinkFile};

/// Export sink creating files under one directory.
///
/// The directory is created on first use. Existing files with the same
/// name are truncated (create-or-truncate contract).
pub struct DirectoryExportSink {
    dir: PathBuf,
}

impl DirectoryExportSink {
    /// Create a sink rooted at `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The directory exports are written under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ExportSink for DirectoryExportSink {
    async fn create(&self, name: &str) -> Result<SinkFile, SinkError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let file = tokio::fs::File::create(self.dir.join(name)).await?;
        Ok(Box::new(file))
    }
}
