use assert_cmd::Command;
use libpngmeta::prelude::*;
use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk};
use predicates::prelude::*;
use std::fs;

fn minimal_png() -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
    png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());
    png
}

#[test]
fn embed_then_extract_via_binary() {
    let image = format!("{}/bin_round_trip.png", env!("CARGO_TARGET_TMPDIR"));
    fs::write(&image, minimal_png()).unwrap();

    Command::cargo_bin("pngmeta")
        .unwrap()
        .args(["--quiet", "embed", &image, "--json", r#"{"mega":"a castle"}"#])
        .assert()
        .success();
    Command::cargo_bin("pngmeta")
        .unwrap()
        .args(["--quiet", "extract", &image])
        .assert()
        .success()
        .stdout(predicate::str::contains("a castle"));
}

#[test]
fn extract_reports_missing_payload() {
    let image = format!("{}/bin_missing.png", env!("CARGO_TARGET_TMPDIR"));
    fs::write(&image, minimal_png()).unwrap();

    Command::cargo_bin("pngmeta")
        .unwrap()
        .args(["--quiet", "extract", &image])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no embedded metadata"));
}
