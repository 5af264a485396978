//! Utility functions shared by the chunk codec and the engines

use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crc32fast::Hasher;

use crate::{XdatError, XdatResult};

/// The fixed 8-byte magic that opens every PNG stream
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Calculate CRC32 checksum for given data
pub fn calculate_crc32(data: &[u8]) -> u32 {
    calculate_crc32_parts(&[data])
}

/// Calculate one CRC32 over several slices as if they were concatenated
pub fn calculate_crc32_parts(parts: &[&[u8]]) -> u32 {
    let mut hasher = Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}

/// Read a big-endian u32 from byte slice, `None` if fewer than 4 bytes remain
pub fn read_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let field = bytes.get(offset..end)?;
    Some(u32::from_be_bytes(field.try_into().ok()?))
}

/// Validate PNG signature
pub fn is_png_signature(data: &[u8]) -> bool {
    data.len() >= 8 && data[0..8] == PNG_SIGNATURE
}

/// Raw bytes of a file name, exactly as the OS stores them
#[cfg(unix)]
pub fn os_str_to_bytes(name: &OsStr) -> XdatResult<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Ok(name.as_bytes())
}

/// Raw bytes of a file name; names that are not valid Unicode are refused
#[cfg(not(unix))]
pub fn os_str_to_bytes(name: &OsStr) -> XdatResult<&[u8]> {
    name.to_str()
        .map(str::as_bytes)
        .ok_or_else(|| XdatError::InvalidFileName(name.to_string_lossy().into_owned()))
}

/// File name for the given raw bytes
#[cfg(unix)]
pub fn bytes_to_os_str(name: &[u8]) -> XdatResult<&OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Ok(OsStr::from_bytes(name))
}

#[cfg(not(unix))]
pub fn bytes_to_os_str(name: &[u8]) -> XdatResult<&OsStr> {
    std::str::from_utf8(name)
        .map(OsStr::new)
        .map_err(|_| XdatError::InvalidFileName(name.escape_ascii().to_string()))
}

/// Open a file for buffered reading, keeping the path in the error
pub fn open_input(path: &Path) -> XdatResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| XdatError::FileOpen { path: path.to_path_buf(), source })
}
