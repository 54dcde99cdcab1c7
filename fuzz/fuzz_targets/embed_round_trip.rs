#![no_main]

use libfuzzer_sys::fuzz_target;
use libpngmeta::prelude::*;
use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk, TextKeyword, embed_text, extract_text};

fuzz_target!(|text: &str| {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());

    let embedded = embed_text(&png, TextKeyword::BananaPro.keyword(), text).unwrap();
    assert_eq!(extract_text(&embedded).as_deref(), Some(text));
});
