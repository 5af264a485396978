//! Layout of the file carried inside an `xdat` chunk
//!
//! `name_length` (u32 BE) + `name` (`name_length` bytes, no terminator) +
//! file content (everything that is left).

use crate::png::{Chunk, ChunkType};
use crate::utils::read_u32_be;
use crate::{XdatError, XdatResult};

/// Size of the name length prefix
const NAME_LENGTH_SIZE: usize = 4;

/// A named file ready to travel inside an `xdat` chunk
///
/// The name is kept as raw bytes so that file names which are not valid UTF-8
/// survive embedding and extraction unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPayload {
    pub name: Vec<u8>,
    pub content: Vec<u8>,
}

impl EmbeddedPayload {
    pub fn new(name: impl Into<Vec<u8>>, content: Vec<u8>) -> Self {
        Self { name: name.into(), content }
    }

    /// Printable form of the name, non-ASCII bytes escaped
    pub fn display_name(&self) -> String {
        self.name.escape_ascii().to_string()
    }

    /// Decode the chunk data of an `xdat` chunk
    pub fn decode(data: &[u8]) -> XdatResult<Self> {
        let name_length = read_u32_be(data, 0).ok_or(XdatError::MalformedPayload {
            name_length: 0,
            available: data.len(),
        })?;

        let rest = &data[NAME_LENGTH_SIZE..];
        if name_length as usize > rest.len() {
            return Err(XdatError::MalformedPayload { name_length, available: rest.len() });
        }
        let (name, content) = rest.split_at(name_length as usize);

        Ok(Self { name: name.to_vec(), content: content.to_vec() })
    }

    /// Encode into chunk data
    pub fn encode(&self) -> XdatResult<Vec<u8>> {
        let name = self.name.as_slice();
        let name_length = u32::try_from(name.len()).map_err(|_| XdatError::PayloadTooLarge(name.len()))?;

        let mut data = Vec::with_capacity(NAME_LENGTH_SIZE + name.len() + self.content.len());
        data.extend_from_slice(&name_length.to_be_bytes());
        data.extend_from_slice(name);
        data.extend_from_slice(&self.content);
        Ok(data)
    }

    /// Synthesize the `xdat` chunk, CRC included
    pub fn to_chunk(&self) -> XdatResult<Chunk> {
        Chunk::new(ChunkType::XDAT, self.encode()?)
    }
}
