//! Reconstructed session state.
//!
//! Windows own their tabs by value; moving a tab between windows is an
//! explicit transfer between two vectors, never shared references. Ids
//! are stream-local: unique within one snapshot, meaningless across
//! snapshots. Closed entities stay in the state with `deleted` set so a
//! caller can still show them on request.

use serde::Serialize;

use relic_codec::DecodeSummary;
use relic_workspaces::{Workspace, WorkspaceId};

pub type WindowId = u32;
pub type TabId = u32;

/// Window that houses tabs referenced before any window attachment.
/// Chromium allocates window ids from zero, so a truncated log that lost
/// its creation records would have put those tabs here.
pub const ORPHAN_WINDOW: WindowId = 0;

/// Final state of one replayed snapshot.
///
/// Serialized shape is a compatibility contract with downstream
/// consumers: `windows` -> list -> `tabs` -> list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub windows: Vec<Window>,
    /// The snapshot ended mid-record; this state reflects the decodable
    /// prefix only.
    pub truncated: bool,
    /// Decode counters, so nothing skipped goes unreported.
    pub summary: DecodeSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Window {
    pub id: WindowId,
    pub active: bool,
    pub deleted: bool,
    pub tabs: Vec<Tab>,
}

impl Window {
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            active: false,
            deleted: false,
            tabs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tab {
    pub id: TabId,
    /// Latest title the log carried; empty until a navigation supplies one.
    pub title: String,
    pub active: bool,
    pub deleted: bool,
    pub pinned: bool,
    pub group: Option<u64>,
    pub workspace: Option<WorkspaceRef>,
}

impl Tab {
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            title: String::new(),
            active: false,
            deleted: false,
            pinned: false,
            group: None,
            workspace: None,
        }
    }
}

/// A tab's workspace annotation.
///
/// Replay records the raw id; resolution against the profile's workspace
/// store happens as a post-pass. Ids the store does not know stay
/// unresolved instead of being dropped, so callers can still group by
/// raw id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkspaceRef {
    Resolved {
        name: String,
        emoji: Option<String>,
    },
    Unresolved {
        id: WorkspaceId,
    },
}

impl WorkspaceRef {
    pub fn resolved(workspace: &Workspace) -> Self {
        WorkspaceRef::Resolved {
            name: workspace.name.clone(),
            emoji: workspace.emoji.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            WorkspaceRef::Resolved { name, .. } => Some(name),
            WorkspaceRef::Unresolved { .. } => None,
        }
    }
}

impl SessionState {
    /// Window by id, created on first reference in file order.
    pub(crate) fn ensure_window(&mut self, id: WindowId) -> &mut Window {
        let pos = match self.windows.iter().position(|w| w.id == id) {
            Some(pos) => pos,
            None => {
                self.windows.push(Window::new(id));
                self.windows.len() - 1
            }
        };
        &mut self.windows[pos]
    }

    /// Locate a tab as (window index, tab index).
    pub(crate) fn locate_tab(&self, tab_id: TabId) -> Option<(usize, usize)> {
        self.windows.iter().enumerate().find_map(|(wi, window)| {
            window
                .tabs
                .iter()
                .position(|t| t.id == tab_id)
                .map(|ti| (wi, ti))
        })
    }

    /// Tab by id; a tab referenced before creation materializes in the
    /// orphan window with default state.
    pub(crate) fn ensure_tab(&mut self, tab_id: TabId) -> &mut Tab {
        if self.locate_tab(tab_id).is_none() {
            self.ensure_window(ORPHAN_WINDOW).tabs.push(Tab::new(tab_id));
        }
        let (wi, ti) = match self.locate_tab(tab_id) {
            Some(found) => found,
            // Unreachable: the tab was just inserted above.
            None => (0, 0),
        };
        &mut self.windows[wi].tabs[ti]
    }

    /// Attach a tab to a window at `index`, detaching it from its current
    /// owner first. The tab keeps its state across the transfer; `index`
    /// clamps to the target's length.
    pub(crate) fn attach_tab(&mut self, tab_id: TabId, window_id: WindowId, index: usize) {
        let tab = match self.locate_tab(tab_id) {
            Some((wi, ti)) => self.windows[wi].tabs.remove(ti),
            None => Tab::new(tab_id),
        };
        let window = self.ensure_window(window_id);
        let at = index.min(window.tabs.len());
        window.tabs.insert(at, tab);
    }

    /// All tabs across all windows, in window order then tab order.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.windows.iter().flat_map(|w| w.tabs.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_window_preserves_first_appearance_order() {
        let mut state = SessionState::default();
        state.ensure_window(7);
        state.ensure_window(3);
        state.ensure_window(7);
        let ids: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn test_attach_tab_moves_ownership() {
        let mut state = SessionState::default();
        state.attach_tab(10, 1, 0);
        state.attach_tab(11, 1, 1);
        state.attach_tab(10, 2, 0);

        let ids_in = |state: &SessionState, wid: WindowId| -> Vec<TabId> {
            state
                .windows
                .iter()
                .find(|w| w.id == wid)
                .unwrap()
                .tabs
                .iter()
                .map(|t| t.id)
                .collect()
        };
        assert_eq!(ids_in(&state, 1), vec![11]);
        assert_eq!(ids_in(&state, 2), vec![10]);
    }

    #[test]
    fn test_attach_tab_clamps_index() {
        let mut state = SessionState::default();
        state.attach_tab(10, 1, 99);
        state.attach_tab(11, 1, 99);
        let window = &state.windows[0];
        assert_eq!(window.tabs.len(), 2);
        assert_eq!(window.tabs[1].id, 11);
    }

    #[test]
    fn test_ensure_tab_houses_orphans_in_window_zero() {
        let mut state = SessionState::default();
        state.ensure_tab(42);
        assert_eq!(state.windows[0].id, ORPHAN_WINDOW);
        assert_eq!(state.windows[0].tabs[0].id, 42);
    }

    #[test]
    fn test_serialized_shape_matches_contract() {
        let mut state = SessionState::default();
        state.attach_tab(10, 1, 0);
        let json = serde_json::to_value(&state).unwrap();
        assert!(json["windows"][0]["tabs"][0]["title"].is_string());
        assert_eq!(json["windows"][0]["tabs"][0]["workspace"], serde_json::Value::Null);
    }
}
