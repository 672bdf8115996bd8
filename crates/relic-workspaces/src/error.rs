//! Workspace store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Failed to read workspace store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed workspace store: {0}")]
    MalformedStore(#[from] serde_json::Error),
}
