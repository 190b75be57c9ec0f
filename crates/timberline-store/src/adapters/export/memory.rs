//! In-memory export sink.
//!
//! Captures everything written through the sink, keyed by file name, so
//! tests can assert on export contents without touching the filesystem.

use std::collections::HashMap;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::io::AsyncWrite;

use crate::domain::errors::SinkError;
use crate::ports::outbound::{ExportSink, SinkFile};

type SharedBuffer = Arc<Mutex<Vec<u8>>>;

/// Export sink capturing file contents in memory.
#[derive(Default, Clone)]
pub struct MemoryExportSink {
    files: Arc<Mutex<HashMap<String, SharedBuffer>>>,
}

impl MemoryExportSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of a captured file, if one was created under `name`.
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().expect("sink lock poisoned");
        files
            .get(name)
            .map(|buffer| buffer.lock().expect("buffer lock poisoned").clone())
    }

    /// Names of all files created through this sink.
    pub fn file_names(&self) -> Vec<String> {
        let files = self.files.lock().expect("sink lock poisoned");
        files.keys().cloned().collect()
    }
}

#[async_trait]
impl ExportSink for MemoryExportSink {
    async fn create(&self, name: &str) -> Result<SinkFile, SinkError> {
        let buffer: SharedBuffer = Arc::default();
        self.files
            .lock()
            .map_err(|_| SinkError::Io {
                message: "sink lock poisoned".to_string(),
            })?
            .insert(name.to_string(), Arc::clone(&buffer));
        Ok(Box::new(MemoryFile { buffer }))
    }
}

struct MemoryFile {
    buffer: SharedBuffer,
}

impl AsyncWrite for MemoryFile {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        data: &[u8],
    ) -> Poll<io::Result<usize>> {
        self.buffer
            .lock()
            .expect("buffer lock poisoned")
            .extend_from_slice(data);
        Poll::Ready(Ok(data.len()))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
