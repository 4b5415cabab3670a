//! The Region/Anvil container format: 32x32 chunks of NBT data packed into
//! 4 KiB sectors, addressed by a fixed 8 KiB header of offsets and
//! timestamps.

mod compression;

pub use compression::Compression;

use crate::document::Document;
use crate::error::{Error, Result};
use byteorder::{BigEndian, ByteOrder};

const SIDE: i32 = 32;
const CELL_COUNT: usize = (SIDE * SIDE) as usize;
const HEADER_LEN: usize = 8192;
const SECTOR_LEN: usize = 4096;

/// One occupied slot in a region: the chunk's NBT document, the wall-clock
/// time it was last written, and which compression it's stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub document: Document,
    pub timestamp: u32,
    pub compression: Compression,
}

/// A single `.mca`/`.mcr` file: a 32x32 grid of chunk slots, each either
/// absent (never generated) or an occupied [`Cell`].
///
/// `x`/`z` are the region's own coordinates (the region file covers chunk
/// coordinates `32*x..32*x+32` and `32*z..32*z+32`), usually recovered from
/// the filename via [`coords_from_filename`].
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub x: i32,
    pub z: i32,
    cells: Vec<Option<Cell>>,
}

fn index_of(x: i32, z: i32) -> Option<usize> {
    if (0..SIDE).contains(&x) && (0..SIDE).contains(&z) {
        Some((z * SIDE + x) as usize)
    } else {
        None
    }
}

impl Region {
    pub fn new(x: i32, z: i32) -> Region {
        Region {
            x,
            z,
            cells: vec![None; CELL_COUNT],
        }
    }

    /// The chunk slot at offset `(x, z)` within the region, `0..32` each.
    pub fn get(&self, x: i32, z: i32) -> Option<&Cell> {
        index_of(x, z).and_then(|i| self.cells[i].as_ref())
    }

    pub fn set(&mut self, x: i32, z: i32, cell: Option<Cell>) {
        if let Some(i) = index_of(x, z) {
            self.cells[i] = cell;
        }
    }

    /// Iterates every slot in z-major order, matching the on-disk layout:
    /// `(offset_x, offset_z, cell)` for all 1024 positions, occupied or not.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Option<&Cell>)> {
        (0..SIDE).flat_map(move |z| {
            (0..SIDE).map(move |x| (x, z, self.get(x, z)))
        })
    }

    pub fn decode(bytes: &[u8], x: i32, z: i32) -> Result<Region> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::TruncatedInput);
        }

        let mut cells = vec![None; CELL_COUNT];

        for cz in 0..SIDE {
            for cx in 0..SIDE {
                let meta_offset = (128 * cz + 4 * cx) as usize;
                let offset = BigEndian::read_u24(&bytes[meta_offset..meta_offset + 3]);
                let sectors = bytes[meta_offset + 3];

                if offset == 0 && sectors == 0 {
                    continue;
                }
                // Sectors 0 and 1 are the header itself; a non-absent entry
                // pointing inside it is corrupt, not a valid chunk.
                if offset < 2 {
                    return Err(Error::TruncatedInput);
                }

                let timestamp_offset = meta_offset + SECTOR_LEN;
                let timestamp = BigEndian::read_u32(&bytes[timestamp_offset..timestamp_offset + 4]);

                let chunk_offset = SECTOR_LEN * offset as usize;
                if bytes.len() < chunk_offset + 5 {
                    return Err(Error::TruncatedInput);
                }
                let chunk_len = BigEndian::read_u32(&bytes[chunk_offset..chunk_offset + 4]) as usize;
                let compression = Compression::from_id(bytes[chunk_offset + 4])?;
                let compressed_len = chunk_len.checked_sub(1).ok_or(Error::TruncatedInput)?;

                let payload_start = chunk_offset + 5;
                let payload_end = payload_start + compressed_len;
                if bytes.len() < payload_end {
                    return Err(Error::TruncatedInput);
                }

                let inflated = compression.decompress(&bytes[payload_start..payload_end])?;
                let document = Document::decode(&inflated)?;

                cells[(cz * SIDE + cx) as usize] = Some(Cell {
                    document,
                    timestamp,
                    compression,
                });
            }
        }

        Ok(Region { x, z, cells })
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut frames: Vec<Option<Vec<u8>>> = vec![None; CELL_COUNT];
        let mut sector_offset = vec![0u32; CELL_COUNT];
        let mut sector_span = vec![0u8; CELL_COUNT];
        let mut next_offset: u32 = 2;

        for cz in 0..SIDE {
            for cx in 0..SIDE {
                let i = (cz * SIDE + cx) as usize;
                let cell = match &self.cells[i] {
                    Some(cell) => cell,
                    None => continue,
                };

                sector_offset[i] = next_offset;
                let raw = cell.document.encode()?;
                let compressed = cell.compression.compress(&raw)?;
                let frame_len = 5 + compressed.len();
                let span = (frame_len + SECTOR_LEN - 1) / SECTOR_LEN;
                if span > 255 {
                    return Err(Error::ChunkTooLarge);
                }
                next_offset += span as u32;
                sector_span[i] = span as u8;

                let mut frame = vec![0u8; span * SECTOR_LEN];
                BigEndian::write_u32(&mut frame[0..4], (1 + compressed.len()) as u32);
                frame[4] = cell.compression.id();
                frame[5..5 + compressed.len()].copy_from_slice(&compressed);
                frames[i] = Some(frame);
            }
        }

        let mut metadata = vec![0u8; SECTOR_LEN];
        let mut timestamps = vec![0u8; SECTOR_LEN];
        for cz in 0..SIDE {
            for cx in 0..SIDE {
                let i = (cz * SIDE + cx) as usize;
                let meta_offset = (128 * cz + 4 * cx) as usize;
                BigEndian::write_u24(&mut metadata[meta_offset..meta_offset + 3], sector_offset[i]);
                metadata[meta_offset + 3] = sector_span[i];
                if let Some(cell) = &self.cells[i] {
                    BigEndian::write_u32(&mut timestamps[meta_offset..meta_offset + 4], cell.timestamp);
                }
            }
        }

        let mut out = Vec::with_capacity(HEADER_LEN + frames.iter().flatten().map(|f| f.len()).sum::<usize>());
        out.extend_from_slice(&metadata);
        out.extend_from_slice(&timestamps);
        for frame in frames.into_iter().flatten() {
            out.extend_from_slice(&frame);
        }
        Ok(out)
    }
}

/// Recovers a region's `(x, z)` coordinates from a file name of the form
/// `r.<x>.<z>.mca` or `r.<x>.<z>.mcr`, ignoring any directory components.
pub fn coords_from_filename(filename: &str) -> Option<(i32, i32)> {
    let base = filename.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(filename);
    let rest = base.strip_prefix("r.")?;
    let rest = match rest.strip_suffix(".mca") {
        Some(rest) => rest,
        None => rest.strip_suffix(".mcr")?,
    };
    let mut parts = rest.split('.');
    let x = parts.next()?.parse().ok()?;
    let z = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, z))
}
