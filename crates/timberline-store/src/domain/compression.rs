//! # Message Compression
//!
//! Reversible byte-stream compression for record messages, applied by the
//! engine to messages above the configured size threshold.
//!
//! The codec contract: `decompress(compress(x)) == x` for all byte
//! sequences, including the empty sequence. Malformed compressed input
//! yields a decode error the caller must treat as non-retryable; the
//! engine recovers locally (best-available form) rather than failing the
//! enclosing operation.

use std::io;

use thiserror::Error;

/// The fixed zstd quality level used for stored messages.
///
/// Bottom of the "max compression" band (19-22); higher levels buy little
/// ratio on log-sized payloads at a steep memory cost.
pub const ZSTD_LEVEL: i32 = 19;

/// Errors during compression or decompression.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Compression failed.
    #[error("compression failed: {0}")]
    Compress(#[source] io::Error),

    /// Decompression failed; the input is malformed or truncated.
    #[error("decompression failed: {0}")]
    Decompress(#[source] io::Error),
}

/// Trait for message codec implementations.
pub trait MessageCodec: Send + Sync {
    /// Compress a byte sequence.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Decompress a byte sequence produced by `compress`.
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

/// Zstd codec at the fixed maximum-quality level.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZstdCodec;

impl MessageCodec for ZstdCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::encode_all(data, ZSTD_LEVEL).map_err(CodecError::Compress)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::decode_all(data).map_err(CodecError::Decompress)
    }
}

/// No-op codec that returns data unchanged. Test helper.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCodec;

impl MessageCodec for NoopCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }
}
