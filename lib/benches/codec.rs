use criterion::{Criterion, criterion_group, criterion_main};
use libpngmeta::prelude::*;
use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk, embed_text, extract_text};
use std::hint::black_box;

const PAYLOAD: &str = r#"{"mega":"a castle","lighting":"dawn","scene":"mist","view":"aerial"}"#;

fn sample_png() -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
    for i in 0..16u8 {
        png.extend_from_slice(&RawChunk::from_data(ChunkType::IDAT, vec![i; 4096]).to_bytes());
    }
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());
    png
}

fn bench_embed(c: &mut Criterion) {
    let png = sample_png();
    c.bench_function("embed_text", |b| {
        b.iter(|| embed_text(black_box(&png), "BananaProData", PAYLOAD).unwrap())
    });
}

fn bench_extract(c: &mut Criterion) {
    let png = embed_text(&sample_png(), "BananaProData", PAYLOAD).unwrap();
    c.bench_function("extract_text", |b| {
        b.iter(|| extract_text(black_box(&png)).unwrap())
    });
}

criterion_group!(benches, bench_embed, bench_extract);
criterion_main!(benches);
