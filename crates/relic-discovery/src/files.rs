//! Session snapshot file listing.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Result;

/// A candidate session snapshot on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionFile {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

/// Names Chromium-family browsers use for session snapshots.
pub fn is_session_file(name: &str) -> bool {
    name == "Current Session"
        || name == "Current Tabs"
        || name.starts_with("Session_")
        || name.starts_with("Tabs_")
}

/// Session files in a directory, newest first by modification time.
///
/// The newest file is the one the browser wrote last, which is what a
/// caller recovering "the current session" wants by default.
pub fn list_session_files(sessions_dir: &Path) -> Result<Vec<SessionFile>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(sessions_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_session_file(name) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map(DateTime::<Utc>::from)?;
        files.push(SessionFile {
            path: entry.path(),
            modified,
        });
    }
    sort_newest_first(&mut files);
    tracing::debug!(
        dir = %sessions_dir.display(),
        count = files.len(),
        "listed session files"
    );
    Ok(files)
}

fn sort_newest_first(files: &mut [SessionFile]) {
    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.path.cmp(&b.path)));
}
