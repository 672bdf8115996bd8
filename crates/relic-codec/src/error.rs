//! Codec error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Not a session snapshot (header magic mismatch)")]
    UnsupportedFormat,

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    #[error("Snapshot data truncated: needed {needed} bytes, {remaining} left")]
    TruncatedData { needed: usize, remaining: usize },
}
