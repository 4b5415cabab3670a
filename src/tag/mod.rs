//! The tagged-union tag tree and its scalar/array payload codecs.
//!
//! Framing is controlled by two booleans threaded through from the caller
//! rather than stored on the tag itself (see [`Entry`] and [`List`]):
//! `tagged` decides whether a kind byte is present on the wire, `named`
//! decides whether a length-prefixed string follows it. Top-level tags and
//! compound children are tagged+named; list elements are neither.

mod compound;
mod list;

pub use compound::{Compound, Entry};
pub use list::List;

use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::writer;

/// The wire id of a tag, per the NBT specification. Stable across the
/// lifetime of the format; the id is the single point of truth for which
/// variant of [`Tag`] a given byte represents.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagType {
    End = 0x00,
    Byte = 0x01,
    Short = 0x02,
    Int = 0x03,
    Long = 0x04,
    Float = 0x05,
    Double = 0x06,
    ByteArray = 0x07,
    String = 0x08,
    List = 0x09,
    Compound = 0x0A,
    IntArray = 0x0B,
    LongArray = 0x0C,
}

impl TagType {
    pub fn from_id(id: u8) -> Option<TagType> {
        Some(match id {
            0x00 => TagType::End,
            0x01 => TagType::Byte,
            0x02 => TagType::Short,
            0x03 => TagType::Int,
            0x04 => TagType::Long,
            0x05 => TagType::Float,
            0x06 => TagType::Double,
            0x07 => TagType::ByteArray,
            0x08 => TagType::String,
            0x09 => TagType::List,
            0x0A => TagType::Compound,
            0x0B => TagType::IntArray,
            0x0C => TagType::LongArray,
            _ => return None,
        })
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }
}

/// A decoded or user-constructed NBT value. Owns all of its payload data;
/// there are no borrows into a source buffer and no shared ownership
/// between tags.
///
/// `TAG_End` has no representation here: it is either the sentinel that
/// terminates a [`Compound`]'s entry list (recomputed at encode time, never
/// stored) or, for an empty [`List`], just a declared element kind with no
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::String(_) => TagType::String,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
        }
    }

    /// Decodes a tag's payload, given that its kind byte (and name, if
    /// applicable) has already been consumed by the caller.
    pub(crate) fn read_payload(kind: TagType, reader: &mut Reader<'_>) -> Result<Tag> {
        match kind {
            TagType::End => Err(Error::UnterminatedCompound),
            TagType::Byte => Ok(Tag::Byte(reader.read_i8()?)),
            TagType::Short => Ok(Tag::Short(reader.read_i16()?)),
            TagType::Int => Ok(Tag::Int(reader.read_i32()?)),
            TagType::Long => Ok(Tag::Long(reader.read_i64()?)),
            TagType::Float => Ok(Tag::Float(reader.read_f32()?)),
            TagType::Double => Ok(Tag::Double(reader.read_f64()?)),
            TagType::ByteArray => {
                let len = reader.read_u32()? as usize;
                Ok(Tag::ByteArray(reader.advance(len)?.to_vec()))
            }
            TagType::String => Ok(Tag::String(reader.read_string()?)),
            TagType::List => List::read(reader).map(Tag::List),
            TagType::Compound => Compound::read(reader).map(Tag::Compound),
            TagType::IntArray => {
                let len = reader.read_u32()? as usize;
                let mut values = Vec::with_capacity(reader.capacity_hint(len));
                for _ in 0..len {
                    values.push(reader.read_i32()?);
                }
                Ok(Tag::IntArray(values))
            }
            TagType::LongArray => {
                let len = reader.read_u32()? as usize;
                let mut values = Vec::with_capacity(reader.capacity_hint(len));
                for _ in 0..len {
                    values.push(reader.read_i64()?);
                }
                Ok(Tag::LongArray(values))
            }
        }
    }

    /// Encodes just the payload; the kind byte (and name, if applicable)
    /// is the caller's responsibility.
    pub(crate) fn write_payload(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Tag::Byte(v) => writer::write_i8(out, *v),
            Tag::Short(v) => writer::write_i16(out, *v),
            Tag::Int(v) => writer::write_i32(out, *v),
            Tag::Long(v) => writer::write_i64(out, *v),
            Tag::Float(v) => writer::write_f32(out, *v),
            Tag::Double(v) => writer::write_f64(out, *v),
            Tag::ByteArray(bytes) => {
                writer::write_u32(out, bytes.len() as u32);
                out.extend_from_slice(bytes);
            }
            Tag::String(s) => writer::write_string(out, s)?,
            Tag::List(list) => list.write(out)?,
            Tag::Compound(compound) => compound.write(out)?,
            Tag::IntArray(values) => {
                writer::write_u32(out, values.len() as u32);
                for v in values {
                    writer::write_i32(out, *v);
                }
            }
            Tag::LongArray(values) => {
                writer::write_u32(out, values.len() as u32);
                for v in values {
                    writer::write_i64(out, *v);
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn read_type(reader: &mut Reader<'_>) -> Result<TagType> {
    let id = reader.read_u8()?;
    TagType::from_id(id).ok_or(Error::UnknownTagKind(id))
}
