//! In-memory PNG streams for unit tests

use super::{Chunk, ChunkType};
use crate::utils::PNG_SIGNATURE;

/// Encode one chunk with a correct CRC
pub fn chunk_bytes(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    Chunk::new(ChunkType(*tag), data.to_vec())
        .and_then(|chunk| chunk.write_to(&mut out))
        .expect("fixture chunk");
    out
}

/// Signature followed by the given chunks
pub fn png_from(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    for (tag, data) in chunks {
        png.extend(chunk_bytes(tag, data));
    }
    png
}

/// 1x1 RGB image: IHDR, IDAT, IEND
pub fn create_test_png() -> Vec<u8> {
    let ihdr_data: [u8; 13] = [
        0x00, 0x00, 0x00, 0x01, // width = 1
        0x00, 0x00, 0x00, 0x01, // height = 1
        0x08, // bit depth = 8
        0x02, // color type = 2 (RGB)
        0x00, // compression = 0
        0x00, // filter = 0
        0x00, // interlace = 0
    ];
    let idat_data: [u8; 14] = [
        0x78, 0x9C, 0xED, 0xC1, 0x01, 0x01, 0x00, 0x00, 0x00, 0x80, 0x90, 0xFE, 0x37, 0x10,
    ];
    png_from(&[(b"IHDR", &ihdr_data), (b"IDAT", &idat_data), (b"IEND", &[])])
}
