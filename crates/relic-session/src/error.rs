//! Session parsing error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Codec error: {0}")]
    Codec(#[from] relic_codec::CodecError),

    #[error("Failed to read session file: {0}")]
    Io(#[from] std::io::Error),
}
