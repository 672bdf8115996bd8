//! Session parser facade.
//!
//! Composes decoding and replay for one snapshot, then annotates tabs
//! with resolved workspace labels. The workspace map is supplied by the
//! caller and loaded once per profile, so a batch of files shares one
//! read-only map.

use std::path::Path;

use relic_codec::SnapshotDecoder;
use relic_workspaces::WorkspaceMap;

use crate::model::{SessionState, WorkspaceRef};
use crate::replay::replay;
use crate::Result;

pub struct SessionParser {
    workspaces: WorkspaceMap,
}

impl SessionParser {
    pub fn new(workspaces: WorkspaceMap) -> Self {
        Self { workspaces }
    }

    pub fn without_workspaces() -> Self {
        Self::new(WorkspaceMap::new())
    }

    /// Parse one snapshot buffer into final session state.
    ///
    /// Header errors are fatal for this buffer; truncation mid-stream is
    /// not, and yields the state of the decodable prefix with the
    /// `truncated` flag set.
    pub fn parse(&self, bytes: &[u8]) -> Result<SessionState> {
        let mut decoder = SnapshotDecoder::new(bytes)?;
        let mut state = replay(decoder.by_ref());
        let summary = decoder.summary();
        state.truncated = summary.truncated;
        state.summary = summary;
        self.annotate_workspaces(&mut state);

        tracing::info!(
            windows = state.windows.len(),
            tabs = state.tabs().count(),
            records = summary.records,
            unknown = summary.unknown,
            malformed = summary.malformed,
            truncated = summary.truncated,
            "replayed session snapshot"
        );
        Ok(state)
    }

    /// Read and parse a snapshot file. The file is read in full up front;
    /// the handle is released before any decoding starts.
    pub fn parse_file(&self, path: &Path) -> Result<SessionState> {
        let bytes = std::fs::read(path)?;
        self.parse(&bytes)
    }

    /// Swap raw workspace ids for `{name, emoji}` labels where the
    /// profile's store knows them. Pure annotation: no other tab field is
    /// touched, and unknown ids stay as raw ids.
    fn annotate_workspaces(&self, state: &mut SessionState) {
        if self.workspaces.is_empty() {
            return;
        }
        for window in &mut state.windows {
            for tab in &mut window.tabs {
                if let Some(WorkspaceRef::Unresolved { id }) = tab.workspace {
                    if let Some(workspace) = self.workspaces.get(&id) {
                        tab.workspace = Some(WorkspaceRef::resolved(workspace));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use relic_codec::MAGIC;
    use relic_workspaces::Workspace;

    fn header() -> Vec<u8> {
        let mut buf = MAGIC.to_vec();
        buf.extend_from_slice(&3u32.to_le_bytes());
        buf
    }

    fn push_record(buf: &mut Vec<u8>, id: u8, payload: &[u8]) {
        let len = (payload.len() + 1) as u16;
        buf.extend_from_slice(&len.to_le_bytes());
        buf.push(id);
        buf.extend_from_slice(payload);
    }

    fn push_create_tab(buf: &mut Vec<u8>, tab_id: u32, window_id: u32, index: u32) {
        let mut payload = Vec::new();
        payload.extend_from_slice(&tab_id.to_le_bytes());
        payload.extend_from_slice(&window_id.to_le_bytes());
        payload.extend_from_slice(&index.to_le_bytes());
        push_record(buf, 1, &payload);
    }

    fn push_set_workspace(buf: &mut Vec<u8>, tab_id: u32, workspace_id: u64) {
        let mut payload = Vec::new();
        payload.extend_from_slice(&tab_id.to_le_bytes());
        payload.extend_from_slice(&workspace_id.to_le_bytes());
        push_record(buf, 7, &payload);
    }

    fn workspace_map() -> WorkspaceMap {
        let mut map = WorkspaceMap::new();
        map.insert(
            42,
            Workspace {
                name: "Work".to_string(),
                emoji: Some("💼".to_string()),
            },
        );
        map
    }

    #[test]
    fn test_parse_resolves_known_workspace() {
        let mut buf = header();
        push_record(&mut buf, 0, &1u32.to_le_bytes());
        push_create_tab(&mut buf, 10, 1, 0);
        push_set_workspace(&mut buf, 10, 42);

        let state = SessionParser::new(workspace_map()).parse(&buf).unwrap();
        assert_eq!(
            state.windows[0].tabs[0].workspace,
            Some(WorkspaceRef::Resolved {
                name: "Work".to_string(),
                emoji: Some("💼".to_string())
            })
        );
    }

    #[test]
    fn test_parse_keeps_unknown_workspace_id() {
        let mut buf = header();
        push_create_tab(&mut buf, 10, 1, 0);
        push_set_workspace(&mut buf, 10, 9999);

        let state = SessionParser::new(workspace_map()).parse(&buf).unwrap();
        assert_eq!(
            state.windows[0].tabs[0].workspace,
            Some(WorkspaceRef::Unresolved { id: 9999 })
        );
    }

    #[test]
    fn test_annotation_touches_only_workspace_field() {
        let mut buf = header();
        push_create_tab(&mut buf, 10, 1, 0);
        push_set_workspace(&mut buf, 10, 42);

        let plain = SessionParser::without_workspaces().parse(&buf).unwrap();
        let annotated = SessionParser::new(workspace_map()).parse(&buf).unwrap();

        let mut stripped = annotated.clone();
        stripped.windows[0].tabs[0].workspace = Some(WorkspaceRef::Unresolved { id: 42 });
        assert_eq!(plain, stripped);
    }

    #[test]
    fn test_truncated_stream_yields_prefix_state() {
        let mut buf = header();
        push_record(&mut buf, 0, &1u32.to_le_bytes());
        push_create_tab(&mut buf, 10, 1, 0);
        let complete = SessionParser::without_workspaces().parse(&buf).unwrap();

        // Append a record that claims more bytes than remain
        buf.extend_from_slice(&500u16.to_le_bytes());
        buf.extend_from_slice(&[0u8; 10]);
        let truncated = SessionParser::without_workspaces().parse(&buf).unwrap();

        assert!(truncated.truncated);
        assert_eq!(truncated.windows, complete.windows);
    }

    #[test]
    fn test_bad_magic_is_fatal_for_file() {
        let err = SessionParser::without_workspaces()
            .parse(b"JUNKJUNKJUNK")
            .unwrap_err();
        assert!(matches!(
            err,
            crate::SessionError::Codec(relic_codec::CodecError::UnsupportedFormat)
        ));
    }

    #[test]
    fn test_parse_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Current Session");
        let mut buf = header();
        push_create_tab(&mut buf, 10, 1, 0);
        std::fs::write(&path, &buf).unwrap();

        let state = SessionParser::without_workspaces()
            .parse_file(&path)
            .unwrap();
        assert_eq!(state.windows[0].tabs[0].id, 10);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SessionParser::without_workspaces()
            .parse_file(&dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(err, crate::SessionError::Io(_)));
    }
}
