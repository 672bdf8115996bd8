//! Loading workspace definitions from a profile's preferences store.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::{Result, Workspace, WorkspaceMap};

/// File under the profile directory that holds workspace definitions.
pub const PREFERENCES_FILE: &str = "Preferences";

/// The slice of the preferences JSON we care about. Everything else in
/// the (large) store is ignored.
#[derive(Deserialize)]
struct Preferences {
    vivaldi: Option<VivaldiSection>,
}

#[derive(Deserialize)]
struct VivaldiSection {
    workspaces: Option<WorkspacesSection>,
}

#[derive(Deserialize)]
struct WorkspacesSection {
    list: Option<Vec<WorkspaceEntry>>,
}

#[derive(Deserialize)]
struct WorkspaceEntry {
    id: Option<serde_json::Number>,
    name: Option<String>,
    emoji: Option<String>,
    // Some Vivaldi versions write the emoji under "icon" instead.
    icon: Option<String>,
}

/// Load workspace definitions for a profile, degrading to an empty map.
///
/// Most browsers have no workspace store at all, and a Vivaldi store can
/// be mid-write when we read it. Neither situation should fail a parse,
/// so every error path lands on an empty map with a log line.
pub fn load_workspaces(profile_dir: &Path) -> WorkspaceMap {
    match try_load_workspaces(profile_dir) {
        Ok(map) => {
            if !map.is_empty() {
                tracing::info!(
                    profile = %profile_dir.display(),
                    count = map.len(),
                    "loaded workspace definitions"
                );
            }
            map
        }
        Err(err) => {
            tracing::warn!(
                profile = %profile_dir.display(),
                %err,
                "workspace store unreadable, resolving without workspaces"
            );
            WorkspaceMap::new()
        }
    }
}

/// Load workspace definitions, reporting why the store could not be read.
pub fn try_load_workspaces(profile_dir: &Path) -> Result<WorkspaceMap> {
    let path = profile_dir.join(PREFERENCES_FILE);
    if !path.exists() {
        // Not an error: only Vivaldi profiles carry workspaces.
        return Ok(WorkspaceMap::new());
    }
    let contents = std::fs::read_to_string(&path)?;
    let prefs: Preferences = serde_json::from_str(&contents)?;
    Ok(collect_entries(prefs))
}

fn collect_entries(prefs: Preferences) -> WorkspaceMap {
    let entries = prefs
        .vivaldi
        .and_then(|v| v.workspaces)
        .and_then(|w| w.list)
        .unwrap_or_default();

    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        // Ids are JSON numbers, integral in practice; anything else is
        // unusable as a session-log key.
        let id = match entry.id.as_ref().and_then(serde_json::Number::as_u64) {
            Some(id) => id,
            None => {
                tracing::debug!("skipping workspace entry without a usable id");
                continue;
            }
        };
        let Some(name) = entry.name else {
            tracing::debug!(id, "skipping unnamed workspace entry");
            continue;
        };
        let emoji = entry.emoji.or(entry.icon).filter(|e| !e.is_empty());
        map.insert(id, Workspace { name, emoji });
    }
    map
}
