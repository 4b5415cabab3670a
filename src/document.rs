//! A document is the top-level unit an NBT file holds: zero or more named,
//! tagged root values in sequence, optionally wrapped in a GZIP envelope.

use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::tag::{read_type, Entry, Tag, TagType};
use flate2::read::GzDecoder;
use std::io::Read;

/// The decoded contents of an NBT file: an ordered sequence of root-level
/// named tags. Most files hold exactly one, but the format doesn't require
/// it, so decoding keeps reading roots until the buffer is exhausted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    roots: Vec<Entry>,
}

impl Document {
    pub fn new() -> Document {
        Document { roots: Vec::new() }
    }

    pub fn single(name: impl Into<String>, value: Tag) -> Document {
        Document {
            roots: vec![Entry::new(name, value)],
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.roots.push(entry);
    }

    pub fn roots(&self) -> &[Entry] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<Entry> {
        self.roots
    }

    /// The first root tag, regardless of name. Convenient for the common
    /// single-root case.
    pub fn first(&self) -> Option<&Tag> {
        self.roots.first().map(|entry| &entry.value)
    }

    /// Decodes a sequence of uncompressed, tagged+named root values from
    /// `bytes`. Keeps reading roots until the input is exhausted.
    pub fn decode(bytes: &[u8]) -> Result<Document> {
        let mut reader = Reader::new(bytes);
        let mut roots = Vec::new();
        while reader.remaining() > 0 {
            let start = reader.position();
            let kind = read_type(&mut reader)?;
            if kind == TagType::End {
                break;
            }
            let name = reader.read_string()?;
            let value = Tag::read_payload(kind, &mut reader)?;
            if reader.position() == start {
                return Err(Error::ZeroAdvance);
            }
            roots.push(Entry { name, value });
        }
        Ok(Document { roots })
    }

    /// Encodes every root in order, back to back, with no envelope.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for entry in &self.roots {
            out.push(entry.value.tag_type().id());
            crate::writer::write_string(&mut out, &entry.name)?;
            entry.value.write_payload(&mut out)?;
        }
        Ok(out)
    }

    /// Decodes a file's worth of bytes, transparently unwrapping a GZIP
    /// envelope if present. Files are sniffed by the `1F 8B` magic rather
    /// than by a file extension or caller flag, matching how loaders for
    /// this format behave in the wild.
    pub fn decode_file(bytes: &[u8]) -> Result<Document> {
        if is_gzip(bytes) {
            let mut decoder = GzDecoder::new(bytes);
            let mut inflated = Vec::new();
            decoder.read_to_end(&mut inflated)?;
            Document::decode(&inflated)
        } else {
            Document::decode(bytes)
        }
    }
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B
}
