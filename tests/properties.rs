mod common;

use std::io::Cursor;

use common::{chunk_tags, png_with_idat};
use proptest::prelude::*;
use rust_xdat::png::{ChunkType, ChunkWalker};
use rust_xdat::{EmbeddedPayload, XdatError, embed, probe, read_payload};

fn idat_bodies() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 1..5)
}

fn embed_into(png: Vec<u8>, payload: &EmbeddedPayload) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    embed(Cursor::new(png), payload, &mut out).unwrap();
    out
}

proptest! {
    #[test]
    fn round_trip_preserves_name_and_content(
        idat in idat_bodies(),
        name in prop::collection::vec(any::<u8>(), 1..40),
        content in prop::collection::vec(any::<u8>(), 0..2048),
    ) {
        let refs: Vec<&[u8]> = idat.iter().map(Vec::as_slice).collect();
        let payload = EmbeddedPayload::new(name, content);

        let out = embed_into(png_with_idat(&refs), &payload);

        prop_assert_eq!(read_payload(Cursor::new(out)).unwrap(), payload);
    }

    #[test]
    fn exactly_one_payload_after_first_idat(idat in idat_bodies(), content in prop::collection::vec(any::<u8>(), 0..256)) {
        let refs: Vec<&[u8]> = idat.iter().map(Vec::as_slice).collect();
        let out = embed_into(png_with_idat(&refs), &EmbeddedPayload::new("f", content));

        let tags = chunk_tags(&out);
        prop_assert_eq!(tags.iter().filter(|t| *t == b"xdat").count(), 1);
        let first_idat = tags.iter().position(|t| t == b"IDAT").unwrap();
        prop_assert_eq!(&tags[first_idat + 1], b"xdat");
        prop_assert_eq!(tags.len(), idat.len() + 3);
    }

    #[test]
    fn synthesized_crc_is_correct(name in "[a-z]{1,12}", content in prop::collection::vec(any::<u8>(), 0..512)) {
        let out = embed_into(png_with_idat(&[b"pixels"]), &EmbeddedPayload::new(name, content));

        let xdat = ChunkWalker::after_signature(Cursor::new(out))
            .unwrap()
            .map(Result::unwrap)
            .find(|c| c.chunk_type == ChunkType::XDAT)
            .unwrap();

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(b"xdat");
        hasher.update(&xdat.data);
        prop_assert_eq!(xdat.crc, hasher.finalize());
    }

    #[test]
    fn signature_gate(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(!bytes.starts_with(&common::SIGNATURE));

        let mut out: Vec<u8> = Vec::new();
        prop_assert!(matches!(probe(Cursor::new(bytes.clone()), &mut out, false), Err(XdatError::NotAPng)));
        prop_assert!(matches!(read_payload(Cursor::new(bytes.clone())), Err(XdatError::NotAPng)));
        let result = embed(Cursor::new(bytes), &EmbeddedPayload::new("f", Vec::new()), &mut out);
        prop_assert!(matches!(result, Err(XdatError::NotAPng)));
        prop_assert!(out.is_empty());
    }

    #[test]
    fn probe_lengths_match_chunk_data(idat in idat_bodies()) {
        let refs: Vec<&[u8]> = idat.iter().map(Vec::as_slice).collect();
        let png = png_with_idat(&refs);

        let reports = probe(Cursor::new(png), &mut std::io::sink(), false).unwrap();
        let idat_lengths: Vec<u32> = reports
            .iter()
            .filter(|r| r.chunk_type == ChunkType::IDAT)
            .map(|r| r.length)
            .collect();
        let expected: Vec<u32> = idat.iter().map(|d| d.len() as u32).collect();
        prop_assert_eq!(idat_lengths, expected);
    }
}

#[test]
fn no_idat_output_equals_input() {
    let png = common::png_from(&[(b"IHDR", vec![0; 13]), (b"IEND", Vec::new())]);
    let out = embed_into(png.clone(), &EmbeddedPayload::new("f", b"data".to_vec()));
    assert_eq!(out, png);
}
