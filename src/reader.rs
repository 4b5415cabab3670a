use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};

/// A cursor over a byte slice that tracks how much has been consumed.
///
/// Every tag/document/region decoder is built on top of `advance`, which is
/// the single place truncated input is detected.
pub(crate) struct Reader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Reader<'a> {
        Reader {
            buffer,
            position: 0,
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// A safe `Vec::with_capacity` hint for a declared element count read
    /// from untrusted input: clamped to what the buffer could possibly
    /// still hold, so a corrupt or hostile length prefix (e.g. a list
    /// claiming `u32::MAX` elements) can't force a multi-gigabyte
    /// allocation before a single element is actually read.
    pub(crate) fn capacity_hint(&self, declared_len: usize) -> usize {
        declared_len.min(self.remaining())
    }

    pub(crate) fn advance(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.buffer.len() < self.position + n {
            Err(Error::TruncatedInput)
        } else {
            let slice = &self.buffer[self.position..self.position + n];
            self.position += n;
            Ok(slice)
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        Ok(self.advance(1)?[0])
    }

    pub(crate) fn read_i8(&mut self) -> Result<i8> {
        Ok(self.advance(1)?[0] as i8)
    }

    pub(crate) fn read_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.advance(2)?))
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.advance(4)?))
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.advance(8)?))
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.advance(2)?))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.advance(4)?))
    }

    pub(crate) fn read_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.advance(4)?))
    }

    pub(crate) fn read_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.advance(8)?))
    }

    /// Reads a `u16`-length-prefixed UTF-8 string.
    pub(crate) fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        if len == 0 {
            return Ok(String::new());
        }
        let bytes = self.advance(len)?;
        std::str::from_utf8(bytes)
            .map(|s| s.to_owned())
            .map_err(|_| Error::InvalidUtf8)
    }
}
