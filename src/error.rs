use std::fmt;

/// Failures which can occur while decoding or encoding NBT and Region data.
#[derive(Debug)]
pub enum Error {
    /// The input ended before a field could be fully read. Happens when a
    /// primitive, string, array, list, or compound's declared length runs
    /// past the end of the buffer.
    TruncatedInput,
    /// A tag id byte outside 0x00..=0x0C was encountered.
    UnknownTagKind(u8),
    /// A name or TAG_String payload was not valid (CESU-8/UTF-8) text.
    InvalidUtf8,
    /// Input was exhausted while scanning a TAG_Compound for its
    /// terminating TAG_End.
    UnterminatedCompound,
    /// Internal consistency check: a tag reported zero bytes consumed,
    /// which would spin the decode loop forever.
    ZeroAdvance,
    /// A TAG_String's encoded length exceeds the 16-bit length prefix.
    StringTooLong,
    /// A region chunk's compressed frame would span more than 255
    /// sectors, which cannot be represented in the one-byte span field.
    ChunkTooLarge,
    /// A region chunk frame declared a compression id that isn't 1 (GZIP)
    /// or 2 (DEFLATE/zlib).
    UnknownCompression(u8),
    /// A scalar tag was asked to encode a value outside its signed width.
    IntegerOverflow,
    /// Propagated from the underlying GZIP/DEFLATE transforms.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedInput => f.write_str("input ended before a field could be read"),
            Error::UnknownTagKind(id) => write!(f, "unknown tag kind 0x{:02X}", id),
            Error::InvalidUtf8 => f.write_str("string payload was not valid UTF-8"),
            Error::UnterminatedCompound => {
                f.write_str("compound was not terminated by a TAG_End before input ran out")
            }
            Error::ZeroAdvance => f.write_str("decoder made no progress (bug guard tripped)"),
            Error::StringTooLong => f.write_str("string exceeds the 16-bit length prefix"),
            Error::ChunkTooLarge => f.write_str("chunk span exceeds 255 sectors"),
            Error::UnknownCompression(id) => write!(f, "unknown compression id {}", id),
            Error::IntegerOverflow => f.write_str("value does not fit in the tag's signed width"),
            Error::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
