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
fn strip_removes_embedded_payload() {
    let image = format!("{}/strip_payload.png", env!("CARGO_TARGET_TMPDIR"));
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
    command::entry(cli::Cli::parse_from(["pngmeta", "--quiet", "strip", &image])).unwrap();

    assert_eq!(fs::read(&image).unwrap(), minimal_png());
    let result = command::entry(cli::Cli::parse_from([
        "pngmeta", "--quiet", "extract", &image,
    ]));
    assert!(result.is_err());
}

#[test]
fn strip_without_payload_is_identity() {
    let image = format!("{}/strip_identity.png", env!("CARGO_TARGET_TMPDIR"));
    let output = format!("{}/strip_identity_out.png", env!("CARGO_TARGET_TMPDIR"));
    fs::write(&image, minimal_png()).unwrap();
    command::entry(cli::Cli::parse_from([
        "pngmeta", "--quiet", "strip", &image, "--output", &output,
    ]))
    .unwrap();

    assert_eq!(fs::read(&output).unwrap(), minimal_png());
}
