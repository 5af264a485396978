//! Reading and writing single PNG chunks
//!
//! A chunk on the wire is `length` (u32 BE), `type` (4 ASCII bytes), `length`
//! bytes of data and a CRC-32 (u32 BE) computed over type and data.

use std::fmt;
use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::utils::calculate_crc32_parts;
use crate::{ChunkField, XdatError, XdatResult};

/// Four-byte chunk tag, compared as a big-endian u32 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    /// Compressed image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Stream terminator
    pub const IEND: ChunkType = ChunkType(*b"IEND");
    /// Private chunk carrying an embedded file
    pub const XDAT: ChunkType = ChunkType(*b"xdat");

    pub const fn from_u32(code: u32) -> Self {
        ChunkType(code.to_be_bytes())
    }

    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

/// PNG chunk structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub length: u32,
    pub chunk_type: ChunkType,
    pub data: Vec<u8>,
    pub crc: u32,
}

impl Chunk {
    /// Build a chunk around `data` and stamp it with a freshly computed CRC
    pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> XdatResult<Self> {
        let length = u32::try_from(data.len()).map_err(|_| XdatError::PayloadTooLarge(data.len()))?;
        let crc = checksum_of(chunk_type, &data);
        Ok(Self { length, chunk_type, data, crc })
    }

    /// CRC recomputed from the chunk's type and data
    pub fn computed_crc(&self) -> u32 {
        checksum_of(self.chunk_type, &self.data)
    }

    pub fn is_terminator(&self) -> bool {
        self.chunk_type == ChunkType::IEND
    }

    /// Read the next chunk, `None` if the stream ends cleanly before a new chunk starts
    pub fn read_from<R: Read>(reader: &mut R) -> XdatResult<Option<Self>> {
        let length = match read_length(reader)? {
            Some(length) => length,
            None => return Ok(None),
        };

        let chunk_type = ChunkType::from_u32(read_field(reader, ChunkField::Type)?);

        let mut data = Vec::new();
        data.try_reserve_exact(length as usize)
            .map_err(|_| XdatError::AllocationFailure { length })?;
        let read = reader.by_ref().take(u64::from(length)).read_to_end(&mut data)?;
        if read != length as usize {
            return Err(XdatError::TruncatedStream { field: ChunkField::Data });
        }

        let crc = read_field(reader, ChunkField::Checksum)?;

        Ok(Some(Self { length, chunk_type, data, crc }))
    }

    /// Serialize the chunk exactly as stored, without validating it
    pub fn write_to<W: Write>(&self, writer: &mut W) -> XdatResult<()> {
        writer.write_u32::<BigEndian>(self.length)?;
        writer.write_all(self.chunk_type.as_bytes())?;
        writer.write_all(&self.data)?;
        writer.write_u32::<BigEndian>(self.crc)?;
        Ok(())
    }
}

/// Parse one chunk; running out of input anywhere inside it is an error
pub fn parse<R: Read>(reader: &mut R) -> XdatResult<Chunk> {
    Chunk::read_from(reader)?.ok_or(XdatError::TruncatedStream { field: ChunkField::Length })
}

/// Write one chunk
pub fn write<W: Write>(chunk: &Chunk, writer: &mut W) -> XdatResult<()> {
    chunk.write_to(writer)
}

/// CRC-32 over the 4 type bytes followed by the data
pub fn checksum_of(chunk_type: ChunkType, data: &[u8]) -> u32 {
    calculate_crc32_parts(&[chunk_type.as_bytes(), data])
}

// Distinguishes a clean end of stream (nothing read) from a cut-off length field
fn read_length<R: Read>(reader: &mut R) -> XdatResult<Option<u32>> {
    let mut buf = [0u8; 4];
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    match filled {
        0 => Ok(None),
        4 => Ok(Some(u32::from_be_bytes(buf))),
        _ => Err(XdatError::TruncatedStream { field: ChunkField::Length }),
    }
}

fn read_field<R: Read>(reader: &mut R, field: ChunkField) -> XdatResult<u32> {
    reader.read_u32::<BigEndian>().map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => XdatError::TruncatedStream { field },
        _ => XdatError::Io(e),
    })
}
