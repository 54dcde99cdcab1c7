use libpngmeta::prelude::*;
use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk, embed_text, extract_text};

/// Embed a payload into a synthetic image and read it back
fn main() {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());

    let tagged = embed_text(&png, "BananaProData", r#"{"mega":"a castle","lighting":"dawn"}"#)
        .expect("embed");
    println!("{}", extract_text(&tagged).expect("payload"));
}
