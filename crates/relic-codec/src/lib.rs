//! RELIC Session Snapshot Codec
//!
//! Decodes the append-only binary command log a Chromium-family browser
//! writes while the user works. The log is a fixed header followed by
//! length-prefixed records, each carrying one typed command ("create
//! window", "tab closed", ...). Replaying those commands is the job of
//! `relic-session`; this crate only turns bytes into commands.

mod command;
mod cursor;
mod decoder;
mod error;

pub use command::Command;
pub use cursor::{Cursor, LengthWidth};
pub use decoder::{DecodeSummary, SnapshotDecoder, MAGIC, VERSION_MAX, VERSION_MIN};
pub use error::CodecError;

pub type Result<T> = std::result::Result<T, CodecError>;
