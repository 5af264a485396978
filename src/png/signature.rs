//! PNG signature checks

use std::io::{self, Read, Write};

use crate::utils::{PNG_SIGNATURE, is_png_signature};
use crate::{XdatError, XdatResult};

/// Read exactly 8 bytes and report whether they are the PNG magic
///
/// A short read counts as "not a PNG". Nothing past the 8 bytes is consumed.
pub fn validate<R: Read>(reader: &mut R) -> XdatResult<bool> {
    let mut sig = [0u8; 8];
    match reader.read_exact(&mut sig) {
        Ok(()) => Ok(is_png_signature(&sig)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Like [`validate`], but a mismatch is a [`XdatError::NotAPng`] error
pub fn require<R: Read>(reader: &mut R) -> XdatResult<()> {
    if validate(reader)? {
        Ok(())
    } else {
        Err(XdatError::NotAPng)
    }
}

pub fn write<W: Write>(writer: &mut W) -> XdatResult<()> {
    writer.write_all(&PNG_SIGNATURE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_valid_signature() {
        let mut cursor = Cursor::new([137u8, 80, 78, 71, 13, 10, 26, 10, 0xFF]);
        assert!(validate(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_invalid_signature() {
        let mut cursor = Cursor::new(*b"GIF89a\0\0\0\0");
        assert!(!validate(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_short_input_is_not_png() {
        let mut cursor = Cursor::new([137u8, 80, 78]);
        assert!(matches!(require(&mut cursor), Err(XdatError::NotAPng)));
    }

    #[test]
    fn test_write_signature() {
        let mut out: Vec<u8> = Vec::new();
        write(&mut out).unwrap();
        assert!(validate(&mut Cursor::new(out)).unwrap());
    }
}
