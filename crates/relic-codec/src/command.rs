//! Typed session log commands.
//!
//! The log records window/tab lifecycle events as small typed commands.
//! The set below is closed; ids outside it decode to [`Command::Unknown`]
//! so that snapshots written by newer browser builds stay readable.

use crate::cursor::Cursor;
use crate::Result;

/// Command ids as they appear on disk.
mod ids {
    pub const CREATE_WINDOW: u8 = 0;
    pub const CREATE_TAB: u8 = 1;
    pub const SET_TAB_TITLE: u8 = 2;
    pub const SET_ACTIVE_WINDOW: u8 = 3;
    pub const SET_SELECTED_TAB_IN_WINDOW: u8 = 4;
    pub const TAB_CLOSED: u8 = 5;
    pub const WINDOW_CLOSED: u8 = 6;
    pub const SET_TAB_WORKSPACE: u8 = 7;
    pub const MOVE_TAB_TO_WINDOW: u8 = 8;
    pub const PIN_TAB: u8 = 9;
    pub const SET_TAB_GROUP: u8 = 10;
    pub const SET_TAB_INDEX: u8 = 11;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateWindow {
        window_id: u32,
    },
    CreateTab {
        tab_id: u32,
        window_id: u32,
        index: u32,
    },
    SetTabTitle {
        tab_id: u32,
        title: String,
    },
    SetActiveWindow {
        window_id: u32,
    },
    SetSelectedTabInWindow {
        window_id: u32,
        tab_id: u32,
    },
    TabClosed {
        tab_id: u32,
    },
    WindowClosed {
        window_id: u32,
    },
    SetTabWorkspace {
        tab_id: u32,
        workspace_id: u64,
    },
    MoveTabToWindow {
        tab_id: u32,
        window_id: u32,
        index: u32,
    },
    PinTab {
        tab_id: u32,
        pinned: bool,
    },
    SetTabGroup {
        tab_id: u32,
        group: u64,
    },
    SetTabIndex {
        tab_id: u32,
        index: u32,
    },
    /// Command id this build does not know. Inert during replay.
    Unknown {
        id: u8,
        payload: Vec<u8>,
    },
}

impl Command {
    /// Decode a record payload for the given command id.
    ///
    /// Unrecognized ids succeed as [`Command::Unknown`]. A recognized id
    /// whose payload is too short to carry its fields is an error; the
    /// decoder downgrades that to an inert record and counts it.
    /// Trailing payload bytes beyond the known fields are tolerated,
    /// since newer browser builds may append fields to existing commands.
    pub fn decode(id: u8, payload: &[u8]) -> Result<Self> {
        let mut c = Cursor::new(payload);
        let command = match id {
            ids::CREATE_WINDOW => Command::CreateWindow {
                window_id: c.read_u32()?,
            },
            ids::CREATE_TAB => Command::CreateTab {
                tab_id: c.read_u32()?,
                window_id: c.read_u32()?,
                index: c.read_u32()?,
            },
            ids::SET_TAB_TITLE => Command::SetTabTitle {
                tab_id: c.read_u32()?,
                title: c.read_utf16_string()?,
            },
            ids::SET_ACTIVE_WINDOW => Command::SetActiveWindow {
                window_id: c.read_u32()?,
            },
            ids::SET_SELECTED_TAB_IN_WINDOW => Command::SetSelectedTabInWindow {
                window_id: c.read_u32()?,
                tab_id: c.read_u32()?,
            },
            ids::TAB_CLOSED => Command::TabClosed {
                tab_id: c.read_u32()?,
            },
            ids::WINDOW_CLOSED => Command::WindowClosed {
                window_id: c.read_u32()?,
            },
            ids::SET_TAB_WORKSPACE => Command::SetTabWorkspace {
                tab_id: c.read_u32()?,
                workspace_id: c.read_u64()?,
            },
            ids::MOVE_TAB_TO_WINDOW => Command::MoveTabToWindow {
                tab_id: c.read_u32()?,
                window_id: c.read_u32()?,
                index: c.read_u32()?,
            },
            ids::PIN_TAB => Command::PinTab {
                tab_id: c.read_u32()?,
                pinned: c.read_u8()? != 0,
            },
            ids::SET_TAB_GROUP => Command::SetTabGroup {
                tab_id: c.read_u32()?,
                group: c.read_u64()?,
            },
            ids::SET_TAB_INDEX => Command::SetTabIndex {
                tab_id: c.read_u32()?,
                index: c.read_u32()?,
            },
            _ => Command::Unknown {
                id,
                payload: payload.to_vec(),
            },
        };
        Ok(command)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown { .. })
    }
}
