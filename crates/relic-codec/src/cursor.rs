//! Bounds-checked forward-only reader over an in-memory buffer.
//!
//! Every read either returns the requested value or
//! [`CodecError::TruncatedData`]; the cursor never panics and never reads
//! out of bounds. Values are little-endian, matching the snapshot framing.

use crate::error::CodecError;
use crate::Result;

/// Width of a length-prefix field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthWidth {
    U8,
    U16,
    U32,
}

#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current read offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Take the next `n` bytes, advancing the cursor.
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(CodecError::TruncatedData {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Read a byte-count of the given width, then that many raw bytes.
    pub fn read_length_prefixed_bytes(&mut self, width: LengthWidth) -> Result<&'a [u8]> {
        let len = match width {
            LengthWidth::U8 => self.read_u8()? as usize,
            LengthWidth::U16 => self.read_u16()? as usize,
            LengthWidth::U32 => self.read_u32()? as usize,
        };
        self.take(len)
    }

    /// Read a u32 UTF-16 code-unit count, then that many 2-byte units.
    ///
    /// Tab titles are stored as UTF-16; invalid sequences (unpaired
    /// surrogates) are replaced with U+FFFD rather than failing, since a
    /// mangled title should never abort decoding of the whole snapshot.
    pub fn read_utf16_string(&mut self) -> Result<String> {
        let count = self.read_u32()? as usize;
        let byte_len = count.checked_mul(2).ok_or(CodecError::TruncatedData {
            needed: usize::MAX,
            remaining: self.remaining(),
        })?;
        let bytes = self.take(byte_len)?;
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(char::decode_utf16(units)
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_reads_are_little_endian() {
        let mut cursor = Cursor::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16().unwrap(), 0x0302);
        assert_eq!(cursor.read_u32().unwrap(), 0x07060504);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_short_read_is_truncated_not_panic() {
        let mut cursor = Cursor::new(&[0x01, 0x02]);
        let err = cursor.read_u32().unwrap_err();
        assert_eq!(
            err,
            CodecError::TruncatedData {
                needed: 4,
                remaining: 2
            }
        );
        // Failed read does not advance
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_read_utf16_string() {
        // "Hi" as count-prefixed UTF-16LE
        let mut data = vec![2, 0, 0, 0];
        data.extend_from_slice(&[b'H', 0, b'i', 0]);
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_utf16_string().unwrap(), "Hi");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_read_utf16_replaces_unpaired_surrogate() {
        // Lone high surrogate 0xD800 followed by 'x'
        let mut data = vec![2, 0, 0, 0];
        data.extend_from_slice(&[0x00, 0xD8, b'x', 0]);
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.read_utf16_string().unwrap(), "\u{FFFD}x");
    }

    #[test]
    fn test_read_utf16_truncated_body() {
        // Declares 4 code units but only one is present
        let mut data = vec![4, 0, 0, 0];
        data.extend_from_slice(&[b'a', 0]);
        let mut cursor = Cursor::new(&data);
        assert!(matches!(
            cursor.read_utf16_string(),
            Err(CodecError::TruncatedData { .. })
        ));
    }

    #[test]
    fn test_length_prefixed_bytes() {
        let data = [3, 0, 0, 0, 0xAA, 0xBB, 0xCC, 0xDD];
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            cursor.read_length_prefixed_bytes(LengthWidth::U32).unwrap(),
            &[0xAA, 0xBB, 0xCC]
        );
        assert_eq!(cursor.remaining(), 1);

        let data = [2, 0xAA, 0xBB];
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            cursor.read_length_prefixed_bytes(LengthWidth::U8).unwrap(),
            &[0xAA, 0xBB]
        );
    }
}
