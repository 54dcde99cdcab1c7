use clap::Parser;
use libpngmeta::prelude::*;
use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk};
use png_metadata::{cli, command};
use std::fs;

fn minimal_png() -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());
    png
}

#[test]
fn chunk_list_tagged_image() {
    let image = format!("{}/chunk_list.png", env!("CARGO_TARGET_TMPDIR"));
    fs::write(&image, minimal_png()).unwrap();
    command::entry(cli::Cli::parse_from([
        "pngmeta",
        "--quiet",
        "embed",
        &image,
        "--prompt",
        "a castle",
    ]))
    .unwrap();
    command::entry(cli::Cli::parse_from([
        "pngmeta", "--quiet", "chunk", "list", "--header", "-l", &image,
    ]))
    .unwrap();
}

#[test]
fn chunk_list_rejects_other_formats() {
    let image = format!("{}/chunk_list_gif.png", env!("CARGO_TARGET_TMPDIR"));
    fs::write(&image, b"GIF89a\x00\x00").unwrap();

    let result = command::entry(cli::Cli::parse_from([
        "pngmeta", "--quiet", "chunk", "list", &image,
    ]));
    assert!(result.is_err());
}
