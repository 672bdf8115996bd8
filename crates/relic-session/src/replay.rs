//! Replaying the command stream into session state.
//!
//! Commands apply strictly in arrival order; the log is a diff stream,
//! so later commands override earlier ones for the same field. An id
//! referenced before its creation command (lost to truncation, say) is
//! materialized with default state first, then mutated. Tombstones are
//! monotonic: nothing here ever clears `deleted`.

use relic_codec::Command;

use crate::model::{SessionState, WorkspaceRef};

/// Fold an ordered command sequence into session state.
///
/// Pure with respect to its input: no I/O, no shared state, identical
/// input yields identical output.
pub fn replay<I>(commands: I) -> SessionState
where
    I: IntoIterator<Item = Command>,
{
    let mut state = SessionState::default();
    for command in commands {
        apply(&mut state, command);
    }
    state
}

fn apply(state: &mut SessionState, command: Command) {
    match command {
        Command::CreateWindow { window_id } => {
            state.ensure_window(window_id);
        }
        Command::CreateTab {
            tab_id,
            window_id,
            index,
        } => {
            state.attach_tab(tab_id, window_id, index as usize);
        }
        Command::SetTabTitle { tab_id, title } => {
            state.ensure_tab(tab_id).title = title;
        }
        Command::SetActiveWindow { window_id } => {
            for window in &mut state.windows {
                window.active = false;
            }
            state.ensure_window(window_id).active = true;
        }
        Command::SetSelectedTabInWindow { window_id, tab_id } => {
            if state.locate_tab(tab_id).is_none() {
                state.attach_tab(tab_id, window_id, usize::MAX);
            }
            let window = state.ensure_window(window_id);
            for tab in &mut window.tabs {
                tab.active = tab.id == tab_id;
            }
        }
        Command::TabClosed { tab_id } => {
            state.ensure_tab(tab_id).deleted = true;
        }
        Command::WindowClosed { window_id } => {
            let window = state.ensure_window(window_id);
            window.deleted = true;
            for tab in &mut window.tabs {
                tab.deleted = true;
            }
        }
        Command::SetTabWorkspace {
            tab_id,
            workspace_id,
        } => {
            state.ensure_tab(tab_id).workspace = Some(WorkspaceRef::Unresolved { id: workspace_id });
        }
        Command::MoveTabToWindow {
            tab_id,
            window_id,
            index,
        } => {
            state.attach_tab(tab_id, window_id, index as usize);
        }
        Command::PinTab { tab_id, pinned } => {
            state.ensure_tab(tab_id).pinned = pinned;
        }
        Command::SetTabGroup { tab_id, group } => {
            state.ensure_tab(tab_id).group = Some(group);
        }
        Command::SetTabIndex { tab_id, index } => {
            // Reposition within the current owner; a tab we have never
            // seen materializes in the orphan window first.
            state.ensure_tab(tab_id);
            if let Some((wi, _)) = state.locate_tab(tab_id) {
                let window_id = state.windows[wi].id;
                state.attach_tab(tab_id, window_id, index as usize);
            }
        }
        Command::Unknown { .. } => {}
    }
}
