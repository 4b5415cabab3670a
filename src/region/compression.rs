use crate::error::{Error, Result};
use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression as Flate2Level;
use std::io::{Read, Write};

/// The per-chunk compression scheme, tagged by the one-byte discriminant
/// that precedes each chunk's payload in a region file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zlib,
}

impl Compression {
    pub fn from_id(id: u8) -> Result<Compression> {
        match id {
            1 => Ok(Compression::Gzip),
            2 => Ok(Compression::Zlib),
            other => Err(Error::UnknownCompression(other)),
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Compression::Gzip => 1,
            Compression::Zlib => 2,
        }
    }

    pub(crate) fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self {
            Compression::Gzip => GzDecoder::new(bytes).read_to_end(&mut out)?,
            Compression::Zlib => ZlibDecoder::new(bytes).read_to_end(&mut out)?,
        };
        Ok(out)
    }

    pub(crate) fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        match self {
            Compression::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Flate2Level::default());
                encoder.write_all(bytes)?;
                Ok(encoder.finish()?)
            }
            Compression::Zlib => {
                let mut encoder = ZlibEncoder::new(Vec::new(), Flate2Level::default());
                encoder.write_all(bytes)?;
                Ok(encoder.finish()?)
            }
        }
    }
}
