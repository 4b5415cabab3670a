//! NBT and Region/Anvil binary codecs.
//!
//! [`Tag`] is the owned tree: decode a file into one with [`Document::decode_file`],
//! walk or mutate it, then hand it back to [`Document::encode`]. [`Region`] does
//! the same for the chunk-grid container format that wraps 1024 of these
//! documents into a single `.mca`/`.mcr` file.

pub mod document;
pub mod error;
pub mod region;
pub mod tag;

mod reader;
mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use region::{coords_from_filename, Cell, Compression, Region};
pub use tag::{Compound, Entry, List, Tag, TagType};
