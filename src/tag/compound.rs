use super::{read_type, Tag, TagType};
use crate::error::Result;
use crate::reader::Reader;
use crate::writer;

/// A single named child of a [`Compound`]: a `TAG_*` id, a name, and a
/// payload, in that wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub value: Tag,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: Tag) -> Entry {
        Entry {
            name: name.into(),
            value,
        }
    }
}

/// A `TAG_Compound` payload: an ordered sequence of named entries,
/// terminated on the wire by a `TAG_End` sentinel that isn't itself stored.
///
/// Order is input order, not sorted or rehashed — a `Compound` is a `Vec`,
/// never a map, so round-tripping never reorders a document's keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: Vec<Entry>,
}

impl Compound {
    pub fn new() -> Compound {
        Compound { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Tag) {
        self.push(Entry::new(name, value));
    }

    /// The value of the first entry with this name, if any. A `Compound`
    /// doesn't forbid duplicate names (the wire format doesn't either); this
    /// returns whichever came first.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        self.entries.iter().find(|entry| entry.name == name).map(|entry| &entry.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub(crate) fn read(reader: &mut Reader<'_>) -> Result<Compound> {
        let mut entries = Vec::new();
        loop {
            let kind = read_type(reader)?;
            if kind == TagType::End {
                break;
            }
            let name = reader.read_string()?;
            let value = Tag::read_payload(kind, reader)?;
            entries.push(Entry { name, value });
        }
        Ok(Compound { entries })
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) -> Result<()> {
        for entry in &self.entries {
            out.push(entry.value.tag_type().id());
            writer::write_string(out, &entry.name)?;
            entry.value.write_payload(out)?;
        }
        out.push(TagType::End.id());
        Ok(())
    }
}

impl IntoIterator for Compound {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Entry> for Compound {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Compound {
        Compound {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_compound_round_trips() {
        let compound = Compound::new();
        let mut out = Vec::new();
        compound.write(&mut out).unwrap();
        assert_eq!(out, vec![0x00]);

        let mut reader = Reader::new(&out);
        assert_eq!(Compound::read(&mut reader).unwrap(), compound);
    }

    #[test]
    fn preserves_input_order_not_sorted() {
        let mut compound = Compound::new();
        compound.insert("zebra", Tag::Byte(1));
        compound.insert("apple", Tag::Byte(2));

        let mut out = Vec::new();
        compound.write(&mut out).unwrap();

        let mut reader = Reader::new(&out);
        let decoded = Compound::read(&mut reader).unwrap();
        let names: Vec<&str> = decoded.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
    }

    #[test]
    fn missing_end_tag_is_an_error() {
        let bytes = vec![0x01, 0x00, 0x01, b'a', 0x05];
        let mut reader = Reader::new(&bytes);
        assert!(Compound::read(&mut reader).is_err());
    }
}
