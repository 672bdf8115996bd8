//! Discovery error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to read directory: {0}")]
    Io(#[from] std::io::Error),
}
