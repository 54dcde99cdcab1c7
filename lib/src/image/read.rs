use crate::{
    chunk::{Chunk, ChunkReader, ChunkType, RawChunk, read_chunk_from_slice},
    image::header::{PNG_SIGNATURE, SIGNATURE_CHECK_LEN, chunk_sequence},
    keyword::{TextKeyword, split_keyword},
};
use std::io::{self, Read};

/// Returns the first recognized text payload embedded in `png`.
///
/// Chunks are walked in stream order up to `IEND`; the text of the first
/// `tEXt` chunk whose keyword is a [`TextKeyword`] is returned verbatim,
/// lossily decoded as UTF-8. `None` when the stream is not a PNG, carries no
/// recognized payload, or is cut off before one is found. The stored chunk
/// CRCs are not verified.
///
/// # Examples
/// ```
/// use libpngmeta::{extract_text, PNG_SIGNATURE};
///
/// assert_eq!(extract_text(PNG_SIGNATURE), None);
/// assert_eq!(extract_text(b"not a png"), None);
/// ```
pub fn extract_text(png: &[u8]) -> Option<String> {
    extract_matching(png, |keyword| {
        TextKeyword::from_keyword(keyword).is_some()
    })
}

/// Returns the text payload embedded in `png` under exactly `keyword`.
///
/// Unlike [`extract_text`] the keyword does not have to be one of the
/// recognized [`TextKeyword`]s.
pub fn extract_text_with(png: &[u8], keyword: &str) -> Option<String> {
    extract_matching(png, |k| k == keyword.as_bytes())
}

fn extract_matching(png: &[u8], matches: impl Fn(&[u8]) -> bool) -> Option<String> {
    let mut rest = chunk_sequence(png)?;
    loop {
        let (chunk, r) = read_chunk_from_slice(rest).ok()?;
        if chunk.ty() == ChunkType::tEXt {
            let (keyword, text) = split_keyword(chunk.data());
            if matches(keyword) {
                return Some(String::from_utf8_lossy(text).into_owned());
            }
        } else if chunk.ty() == ChunkType::IEND {
            return None;
        }
        rest = r;
    }
}

/// An iterator over the chunks of a PNG stream.
///
/// Ends after the `IEND` chunk or at a clean end of stream; a stream cut off
/// mid-chunk yields an error item first.
pub struct Chunks<R> {
    reader: ChunkReader<R>,
    done: bool,
}

/// Reads `reader` as a PNG stream and returns an iterator over its chunks.
///
/// # Examples
/// ```
/// use libpngmeta::prelude::*;
/// use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk, read_as_chunks};
///
/// # fn main() -> std::io::Result<()> {
/// let mut png = PNG_SIGNATURE.to_vec();
/// png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
/// png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());
///
/// for chunk in read_as_chunks(png.as_slice())? {
///     println!("{}", chunk?.ty());
/// }
/// # Ok(())
/// # }
/// ```
pub fn read_as_chunks<R: Read>(mut reader: R) -> io::Result<Chunks<R>> {
    let mut signature = [0u8; PNG_SIGNATURE.len()];
    reader.read_exact(&mut signature)?;
    if signature[..SIGNATURE_CHECK_LEN] != PNG_SIGNATURE[..SIGNATURE_CHECK_LEN] {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "It's not PNG"));
    }
    Ok(Chunks {
        reader: ChunkReader::from(reader),
        done: false,
    })
}

impl<R: Read> Iterator for Chunks<R> {
    type Item = io::Result<RawChunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_chunk() {
            Ok(Some(chunk)) => {
                if chunk.ty() == ChunkType::IEND {
                    self.done = true;
                }
                Some(Ok(chunk))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
