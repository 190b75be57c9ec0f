//! # Streaming Adapter
//!
//! Drives repeated paginated queries to produce a bounded-delay sequence
//! of result chunks for bulk delivery. A two-state machine: **fetching**
//! until the terminal page, then **done**.
//!
//! Each iteration queries one page, hands the whole [`SearchResult`] to
//! the transport-facing [`ChunkSink`], then adopts the result's
//! continuation metadata. Between pages the adapter sleeps a fixed short
//! delay so the loop does not saturate the backing store.
//!
//! Cancellation happens at page boundaries: dropping the `stream_query`
//! future stops the loop at its next await, and a dropped transport
//! receiver surfaces as a [`ChunkSendError`]. After either, no further
//! page is fetched and nothing more is sent. Chunks already delivered are
//! not retracted.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::domain::config::StreamConfig;
use crate::domain::criteria::{SearchResult, TimeWindow};
use crate::domain::errors::ServiceError;
use crate::ports::inbound::LogApi;

/// Parameters of one streaming session.
#[derive(Debug, Clone, Default)]
pub struct StreamRequest {
    /// Time window; unbounded sides match everything.
    pub window: TimeWindow,
    /// Level filter; absent or empty means any level.
    pub level: Option<String>,
    /// Requested page size; clamped to the configured cap, 0 selects the
    /// cap itself.
    pub page_size: u32,
}

/// The transport boundary could not accept a chunk (receiver gone).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("stream receiver disconnected")]
pub struct ChunkSendError;

/// Errors terminating a streaming session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The underlying query failed (validation or internal).
    #[error(transparent)]
    Query(#[from] ServiceError),

    /// The transport boundary rejected a chunk.
    #[error(transparent)]
    Transport(#[from] ChunkSendError),
}

/// Transport-facing receiver of result chunks.
#[async_trait]
pub trait ChunkSink: Send {
    /// Deliver one page of results.
    async fn send(&mut self, chunk: SearchResult) -> Result<(), ChunkSendError>;
}

/// The natural sink: a tokio channel whose receiver is the transport.
#[async_trait]
impl ChunkSink for mpsc::Sender<SearchResult> {
    async fn send(&mut self, chunk: SearchResult) -> Result<(), ChunkSendError> {
        mpsc::Sender::send(self, chunk)
            .await
            .map_err(|_| ChunkSendError)
    }
}

/// Stream every page matching the request into `sink`.
///
/// Emits at least one chunk (the first page, even when empty), then
/// follows the continuation metadata until the terminal page. Any query
/// or send error terminates the session immediately.
pub async fn stream_query<A, K>(
    api: &A,
    request: &StreamRequest,
    sink: &mut K,
    config: &StreamConfig,
) -> Result<(), StreamError>
where
    A: LogApi + ?Sized,
    K: ChunkSink,
{
    let page_size = if request.page_size > 0 {
        request.page_size.min(config.max_page_size)
    } else {
        config.max_page_size
    };

    let mut page = 0u32;
    loop {
        let chunk = api
            .query(request.window, request.level.as_deref(), page, page_size)
            .await
            .map_err(|err| {
                error!("[store] stream query failed on page {page}: {err}");
                err
            })?;

        let has_more = chunk.has_more;
        let next_page = chunk.next_page;

        sink.send(chunk).await.map_err(|err| {
            error!("[store] failed to send stream chunk for page {page}: {err}");
            err
        })?;

        if !has_more {
            debug!("[store] stream complete after page {page}");
            return Ok(());
        }
        page = next_page;

        tokio::time::sleep(config.page_delay).await;
    }
}
