//! # PNG xdat Tool
//!
//! This library hides an arbitrary file inside a PNG image and gets it back out
//! again. The file travels in a private, lowercase `xdat` chunk placed right
//! after the first `IDAT` chunk, so ordinary PNG decoders skip it as an unknown
//! ancillary chunk.
//!
//! Everything works at the chunk level: the image data is never decompressed.

// Public API exports
pub mod cli;
pub mod png;
pub mod payload;
pub mod probe;
pub mod extract;
pub mod embed;
pub mod utils;

pub use png::{Chunk, ChunkType, ChunkWalker};
pub use payload::EmbeddedPayload;
pub use probe::{ChunkReport, probe, probe_file};
pub use extract::{extract_file, extract_to_dir, read_payload};
pub use embed::{EmbedOutcome, EmbedState, embed, embed_file};

use std::fmt;
use std::path::PathBuf;

/// Result type alias for xdat operations
pub type XdatResult<T> = Result<T, XdatError>;

/// Field of a chunk that was being read when the stream ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkField {
    Length,
    Type,
    Data,
    Checksum,
}

impl fmt::Display for ChunkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChunkField::Length => "length",
            ChunkField::Type => "type",
            ChunkField::Data => "data",
            ChunkField::Checksum => "crc",
        })
    }
}

/// Comprehensive error type for the xdat tool
#[derive(Debug, thiserror::Error)]
pub enum XdatError {
    #[error("file is not a PNG file")]
    NotAPng,

    #[error("cannot read chunk {field}: unexpected end of stream")]
    TruncatedStream { field: ChunkField },

    #[error("cannot allocate {length} bytes for chunk data")]
    AllocationFailure { length: u32 },

    #[error("cannot open file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no xdat chunk found")]
    PayloadNotFound,

    #[error("malformed xdat chunk: name length {name_length} exceeds {available} available bytes")]
    MalformedPayload { name_length: u32, available: usize },

    #[error("invalid embedded file name: {0}")]
    InvalidFileName(String),

    #[error("payload too large for a PNG chunk: {0} bytes")]
    PayloadTooLarge(usize),

    #[error("CRC mismatch in chunk {chunk}: stored {stored}, computed {computed}")]
    CrcMismatch {
        chunk: String,
        stored: u32,
        computed: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl XdatError {
    /// Validate that a PNG chunk's stored CRC matches the recomputed value
    pub fn validate_png_chunk(chunk_type: ChunkType, stored: u32, computed: u32) -> XdatResult<()> {
        if stored != computed {
            Err(XdatError::CrcMismatch {
                chunk: chunk_type.to_string(),
                stored,
                computed,
            })
        } else {
            Ok(())
        }
    }
}
