//! Recovering an embedded file from a PNG

use std::fs;
use std::io::{Read, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::payload::EmbeddedPayload;
use crate::png::{ChunkType, ChunkWalker};
use crate::utils::{bytes_to_os_str, open_input};
use crate::{XdatError, XdatResult};

/// Walk the stream until the first `xdat` chunk and decode it
///
/// Reaching `IEND`, or the end of input, first is [`XdatError::PayloadNotFound`].
pub fn read_payload<R: Read>(reader: R) -> XdatResult<EmbeddedPayload> {
    for chunk in ChunkWalker::after_signature(reader)? {
        let chunk = chunk?;
        if chunk.chunk_type == ChunkType::XDAT {
            let payload = EmbeddedPayload::decode(&chunk.data)?;
            log::debug!("found xdat chunk carrying {} ({} bytes)", payload.display_name(), payload.content.len());
            return Ok(payload);
        }
    }
    Err(XdatError::PayloadNotFound)
}

/// Extract the embedded file into `dir`, returning the path written
///
/// The file only appears under its final name once all of it has been written.
pub fn extract_to_dir<R: Read>(reader: R, dir: &Path) -> XdatResult<PathBuf> {
    let payload = read_payload(reader)?;
    let target = dir.join(safe_relative_path(&payload.name)?);

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let open_err = |source| XdatError::FileOpen { path: target.clone(), source };
    let mut tmp = NamedTempFile::new_in(parent).map_err(open_err)?;
    tmp.write_all(&payload.content)?;
    tmp.flush()?;
    tmp.persist(&target).map_err(|e| open_err(e.error))?;

    log::info!("extracted {} ({} bytes)", target.display(), payload.content.len());
    Ok(target)
}

/// Extract the file embedded in the PNG at `png_path` into `dir`
pub fn extract_file(png_path: &Path, dir: &Path) -> XdatResult<PathBuf> {
    extract_to_dir(open_input(png_path)?, dir)
}

// Only plain relative names are allowed to leave the PNG
fn safe_relative_path(name: &[u8]) -> XdatResult<&Path> {
    let path = Path::new(bytes_to_os_str(name)?);
    let plain = path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if name.is_empty() || !plain || path.file_name().is_none() {
        return Err(XdatError::InvalidFileName(name.escape_ascii().to_string()));
    }
    Ok(path)
}
