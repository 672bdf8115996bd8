//! Snapshot framing: header validation and lazy record decoding.
//!
//! A snapshot is a 4-byte magic, a u32 version, then records of the form
//! `u16 length | u8 command id | payload`, where the length counts the id
//! byte. The decoder yields commands one at a time; a record whose
//! declared length overruns the buffer ends iteration with the truncation
//! flag set, keeping everything decoded before it.

use serde::Serialize;

use crate::command::Command;
use crate::cursor::Cursor;
use crate::error::CodecError;
use crate::Result;

pub const MAGIC: [u8; 4] = *b"SNSS";
pub const VERSION_MIN: u32 = 1;
pub const VERSION_MAX: u32 = 3;

/// What happened during a decode pass. Nothing the decoder drops is
/// silent: skipped records show up in these counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    /// Records successfully framed, including unknown/malformed ones.
    pub records: usize,
    /// Records whose command id this build does not recognize.
    pub unknown: usize,
    /// Records with a recognized id but a payload too short for its fields.
    pub malformed: usize,
    /// The buffer ended mid-record; later records are lost.
    pub truncated: bool,
}

#[derive(Debug)]
pub struct SnapshotDecoder<'a> {
    cursor: Cursor<'a>,
    version: u32,
    summary: DecodeSummary,
    done: bool,
}

impl<'a> SnapshotDecoder<'a> {
    /// Validate the header and position the decoder at the first record.
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let mut cursor = Cursor::new(buf);
        let magic = cursor
            .read_bytes(4)
            .map_err(|_| CodecError::UnsupportedFormat)?;
        if magic != MAGIC {
            return Err(CodecError::UnsupportedFormat);
        }
        let version = cursor
            .read_u32()
            .map_err(|_| CodecError::UnsupportedFormat)?;
        if !(VERSION_MIN..=VERSION_MAX).contains(&version) {
            return Err(CodecError::UnsupportedVersion(version));
        }
        tracing::debug!(version, bytes = buf.len(), "opened session snapshot");
        Ok(Self {
            cursor,
            version,
            summary: DecodeSummary::default(),
            done: false,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn summary(&self) -> DecodeSummary {
        self.summary
    }

    fn mark_truncated(&mut self) {
        self.summary.truncated = true;
        self.done = true;
        tracing::warn!(
            offset = self.cursor.position(),
            records = self.summary.records,
            "snapshot truncated mid-record, keeping records decoded so far"
        );
    }

    /// Frame the next `(command_id, payload)` record.
    fn next_record(&mut self) -> Option<(u8, &'a [u8])> {
        if self.done || self.cursor.at_end() {
            self.done = true;
            return None;
        }
        let len = match self.cursor.read_u16() {
            Ok(len) => len as usize,
            Err(_) => {
                self.mark_truncated();
                return None;
            }
        };
        // The length counts the command id byte; zero cannot frame one.
        if len == 0 || len > self.cursor.remaining() {
            self.mark_truncated();
            return None;
        }
        let id = match self.cursor.read_u8() {
            Ok(id) => id,
            Err(_) => {
                self.mark_truncated();
                return None;
            }
        };
        match self.cursor.read_bytes(len - 1) {
            Ok(payload) => Some((id, payload)),
            Err(_) => {
                self.mark_truncated();
                None
            }
        }
    }
}

impl Iterator for SnapshotDecoder<'_> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        let (id, payload) = self.next_record()?;
        self.summary.records += 1;
        match Command::decode(id, payload) {
            Ok(command) => {
                if command.is_unknown() {
                    self.summary.unknown += 1;
                    tracing::debug!(id, len = payload.len(), "skipping unknown command");
                }
                Some(command)
            }
            Err(err) => {
                // Recognized id, payload too short for its fields. Keep the
                // record as inert rather than aborting the stream.
                self.summary.malformed += 1;
                tracing::debug!(id, %err, "malformed command payload, treating as inert");
                Some(Command::Unknown {
                    id,
                    payload: payload.to_vec(),
                })
            }
        }
    }
}
