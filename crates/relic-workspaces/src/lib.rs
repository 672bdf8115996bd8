//! RELIC Workspace Resolution
//!
//! Vivaldi lets users group tabs into named, emoji-tagged workspaces. The
//! definitions live outside the session log, in the profile's JSON
//! preferences store. This crate loads that store into a
//! `WorkspaceId -> Workspace` map; browsers without workspaces simply
//! produce an empty map.

mod error;
mod store;

pub use error::WorkspaceError;
pub use store::{load_workspaces, try_load_workspaces, PREFERENCES_FILE};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque workspace identifier as recorded in the session log.
pub type WorkspaceId = u64;

pub type WorkspaceMap = HashMap<WorkspaceId, Workspace>;

/// A user-defined tab grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    pub emoji: Option<String>,
}

pub type Result<T> = std::result::Result<T, WorkspaceError>;
