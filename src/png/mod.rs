//! PNG chunk stream handling: the chunk codec, the signature guard and the walker

pub mod chunk;
pub mod signature;
pub mod walker;

pub use chunk::{Chunk, ChunkType, checksum_of};
pub use walker::ChunkWalker;

#[cfg(test)]
pub(crate) mod fixtures;
