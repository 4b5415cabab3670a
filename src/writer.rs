use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};

pub(crate) fn write_i8(out: &mut Vec<u8>, value: i8) {
    out.push(value as u8);
}

pub(crate) fn write_i16(out: &mut Vec<u8>, value: i16) {
    let mut buf = [0u8; 2];
    BigEndian::write_i16(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub(crate) fn write_i32(out: &mut Vec<u8>, value: i32) {
    let mut buf = [0u8; 4];
    BigEndian::write_i32(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub(crate) fn write_i64(out: &mut Vec<u8>, value: i64) {
    let mut buf = [0u8; 8];
    BigEndian::write_i64(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub(crate) fn write_u16(out: &mut Vec<u8>, value: u16) {
    let mut buf = [0u8; 2];
    BigEndian::write_u16(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub(crate) fn write_u32(out: &mut Vec<u8>, value: u32) {
    let mut buf = [0u8; 4];
    BigEndian::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub(crate) fn write_f32(out: &mut Vec<u8>, value: f32) {
    let mut buf = [0u8; 4];
    BigEndian::write_f32(&mut buf, value);
    out.extend_from_slice(&buf);
}

pub(crate) fn write_f64(out: &mut Vec<u8>, value: f64) {
    let mut buf = [0u8; 8];
    BigEndian::write_f64(&mut buf, value);
    out.extend_from_slice(&buf);
}

/// Writes a `u16`-length-prefixed UTF-8 string.
pub(crate) fn write_string(out: &mut Vec<u8>, value: &str) -> Result<()> {
    let encoded = value.as_bytes();
    if encoded.len() > u16::MAX as usize {
        return Err(Error::StringTooLong);
    }
    write_u16(out, encoded.len() as u16);
    out.extend_from_slice(encoded);
    Ok(())
}
