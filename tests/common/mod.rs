//! PNG streams built in memory for the integration tests

#![allow(dead_code)]

pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(data);

    let mut out = Vec::with_capacity(12 + data.len());
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
    out
}

pub fn png_from(chunks: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let mut png = SIGNATURE.to_vec();
    for (tag, data) in chunks {
        png.extend(chunk(tag, data));
    }
    png
}

/// IHDR, one IDAT per entry of `idat`, IEND
pub fn png_with_idat(idat: &[&[u8]]) -> Vec<u8> {
    let mut chunks = vec![(b"IHDR", vec![0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0])];
    chunks.extend(idat.iter().map(|data| (b"IDAT", data.to_vec())));
    chunks.push((b"IEND", Vec::new()));
    png_from(&chunks)
}

/// Chunk tags in stream order, read without the library
pub fn chunk_tags(png: &[u8]) -> Vec<[u8; 4]> {
    let mut tags = Vec::new();
    let mut offset = 8;
    while offset + 12 <= png.len() {
        let length = u32::from_be_bytes(png[offset..offset + 4].try_into().unwrap()) as usize;
        let tag: [u8; 4] = png[offset + 4..offset + 8].try_into().unwrap();
        tags.push(tag);
        offset += 12 + length;
        if &tag == b"IEND" {
            break;
        }
    }
    tags
}
