//! Hiding a file inside a PNG
//!
//! The source is copied chunk for chunk. Right after the first `IDAT` chunk a
//! single `xdat` chunk carrying the file is inserted; every other chunk keeps
//! its original bytes, stored CRC included.

use std::ffi::OsStr;
use std::fs;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::payload::EmbeddedPayload;
use crate::png::{ChunkType, ChunkWalker, signature};
use crate::utils::{open_input, os_str_to_bytes};
use crate::{XdatError, XdatResult};

/// Progress of an embed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedState {
    /// No `IDAT` chunk copied yet
    AwaitingFirstIdat,
    /// The `xdat` chunk follows the first `IDAT` in the output
    PayloadInjected,
    /// `IEND` has been copied
    Done,
}

/// Summary of a finished embed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOutcome {
    pub state: EmbedState,
    pub injected: bool,
    /// Source chunks copied, not counting the injected one
    pub chunks_copied: usize,
}

/// Copy `source` to `dest`, inserting `payload` after the first `IDAT` chunk
///
/// A source without any `IDAT` chunk is copied unchanged and the outcome
/// reports no injection.
pub fn embed<R: Read, W: Write>(source: R, payload: &EmbeddedPayload, dest: &mut W) -> XdatResult<EmbedOutcome> {
    let mut walker = ChunkWalker::after_signature(source)?;
    let xdat = payload.to_chunk()?;

    signature::write(dest)?;

    let mut state = EmbedState::AwaitingFirstIdat;
    let mut chunks_copied = 0;

    for chunk in walker.by_ref() {
        let chunk = chunk?;
        chunk.write_to(dest)?;
        chunks_copied += 1;

        if chunk.chunk_type == ChunkType::IDAT && state == EmbedState::AwaitingFirstIdat {
            xdat.write_to(dest)?;
            log::info!("injected xdat chunk ({} bytes) after first IDAT", xdat.length);
            state = EmbedState::PayloadInjected;
        }
    }

    let injected = state == EmbedState::PayloadInjected;
    if walker.saw_terminator() {
        state = EmbedState::Done;
    } else {
        log::warn!("source ended without an IEND chunk");
    }
    if !injected {
        log::warn!("source has no IDAT chunk, nothing was embedded");
    }

    dest.flush()?;
    Ok(EmbedOutcome { state, injected, chunks_copied })
}

/// Embed the file at `data_path` into the PNG at `png_path`, writing `output_path`
///
/// The embedded name defaults to the data file's final path component and is
/// stored byte for byte. The output only appears once the whole stream has
/// been written.
pub fn embed_file(png_path: &Path, data_path: &Path, output_path: &Path, name: Option<&OsStr>) -> XdatResult<EmbedOutcome> {
    let source = open_input(png_path)?;
    let content = fs::read(data_path)
        .map_err(|source| XdatError::FileOpen { path: data_path.to_path_buf(), source })?;

    let name = name
        .or_else(|| data_path.file_name())
        .ok_or_else(|| XdatError::InvalidFileName(data_path.display().to_string()))?;
    let payload = EmbeddedPayload::new(os_str_to_bytes(name)?, content);

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let open_err = |source| XdatError::FileOpen { path: output_path.to_path_buf(), source };
    let mut tmp = NamedTempFile::new_in(dir).map_err(open_err)?;

    let outcome = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let outcome = embed(source, &payload, &mut writer)?;
        writer.flush()?;
        outcome
    };

    tmp.persist(output_path).map_err(|e| open_err(e.error))?;
    log::info!("wrote {}", output_path.display());
    Ok(outcome)
}
