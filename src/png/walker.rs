//! Single-pass traversal of the chunks in a PNG stream

use std::io::Read;

use super::chunk::Chunk;
use super::signature;
use crate::XdatResult;

/// Iterator yielding chunks lazily from a byte source
///
/// Stops after the `IEND` chunk has been yielded, when the input runs out on a
/// chunk boundary, or after the first error. It consumes the reader as it
/// goes and cannot be restarted.
#[derive(Debug)]
pub struct ChunkWalker<R> {
    reader: R,
    finished: bool,
    saw_terminator: bool,
}

impl<R: Read> ChunkWalker<R> {
    /// Walk a reader that is already positioned just after the signature
    pub fn new(reader: R) -> Self {
        Self { reader, finished: false, saw_terminator: false }
    }

    /// Check the signature, then walk the chunks that follow it
    pub fn after_signature(mut reader: R) -> XdatResult<Self> {
        signature::require(&mut reader)?;
        Ok(Self::new(reader))
    }

    /// Whether the walk ended on an `IEND` chunk rather than end of input
    pub fn saw_terminator(&self) -> bool {
        self.saw_terminator
    }
}

impl<R: Read> Iterator for ChunkWalker<R> {
    type Item = XdatResult<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match Chunk::read_from(&mut self.reader) {
            Ok(Some(chunk)) => {
                log::debug!("chunk {} ({} bytes)", chunk.chunk_type, chunk.length);
                if chunk.is_terminator() {
                    self.finished = true;
                    self.saw_terminator = true;
                }
                Some(Ok(chunk))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for ChunkWalker<R> {}
