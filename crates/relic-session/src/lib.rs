//! RELIC Session Reconstruction
//!
//! Folds the decoded command stream of a session snapshot into the final
//! window/tab state. The log is a diff stream, not a snapshot: order is
//! the sole source of truth, closed entities are kept as tombstones, and
//! a truncated log yields the state of its decodable prefix.

mod error;
mod model;
mod parser;
mod replay;

pub use error::SessionError;
pub use model::{SessionState, Tab, TabId, Window, WindowId, WorkspaceRef};
pub use parser::SessionParser;
pub use replay::replay;

pub type Result<T> = std::result::Result<T, SessionError>;
