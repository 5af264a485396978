//! Chunk-by-chunk listing of a PNG stream

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use crate::png::{Chunk, ChunkType, ChunkWalker};
use crate::utils::open_input;
use crate::{XdatError, XdatResult};

/// What probe reports for one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    pub chunk_type: ChunkType,
    pub length: u32,
    pub stored_crc: u32,
    pub computed_crc: u32,
}

impl ChunkReport {
    pub fn from_chunk(chunk: &Chunk) -> Self {
        Self {
            chunk_type: chunk.chunk_type,
            length: chunk.length,
            stored_crc: chunk.crc,
            computed_crc: chunk.computed_crc(),
        }
    }

    pub fn crc_matches(&self) -> bool {
        self.stored_crc == self.computed_crc
    }
}

impl fmt::Display for ChunkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "chunk name: {}", self.chunk_type)?;
        writeln!(f, "chunk length: {}", self.length)?;
        writeln!(f, "chunk crc: {}", self.stored_crc)?;
        writeln!(f, "bytes crc: {}", self.computed_crc)
    }
}

/// Print one block per chunk to `out`, up to and including `IEND`
///
/// Checksum mismatches are only reported unless `strict` is set, in which
/// case the first mismatching chunk is printed and then returned as an error.
pub fn probe<R: Read, W: Write>(reader: R, out: &mut W, strict: bool) -> XdatResult<Vec<ChunkReport>> {
    let mut reports = Vec::new();

    for chunk in ChunkWalker::after_signature(reader)? {
        let report = ChunkReport::from_chunk(&chunk?);
        writeln!(out, "{report}")?;

        if !report.crc_matches() {
            if strict {
                XdatError::validate_png_chunk(report.chunk_type, report.stored_crc, report.computed_crc)?;
            }
            log::warn!(
                "chunk {} stores crc {} but its bytes hash to {}",
                report.chunk_type, report.stored_crc, report.computed_crc
            );
        }
        reports.push(report);
    }

    out.flush()?;
    Ok(reports)
}

/// Probe the PNG file at `path`
pub fn probe_file<W: Write>(path: &Path, out: &mut W, strict: bool) -> XdatResult<Vec<ChunkReport>> {
    probe(open_input(path)?, out, strict)
}
