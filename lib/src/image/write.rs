use crate::{
    chunk::{Chunk, ChunkType, RawChunk, read_chunk_from_slice},
    error::EncodeError,
    image::header::chunk_sequence,
    keyword::TextKeyword,
};

/// Returns a new PNG stream with `text` embedded under `keyword` as a `tEXt`
/// chunk inserted immediately after the `IHDR` chunk.
///
/// Every byte of the input other than the inserted chunk is preserved
/// verbatim. The keyword is conventionally 1-79 Latin-1 bytes without NUL
/// and is embedded as given.
///
/// # Examples
/// ```
/// use libpngmeta::prelude::*;
/// use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk, embed_text, extract_text};
///
/// # fn main() -> Result<(), libpngmeta::EncodeError> {
/// let mut png = PNG_SIGNATURE.to_vec();
/// png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
/// png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());
///
/// let tagged = embed_text(&png, "parameters", "masterpiece")?;
/// assert_eq!(extract_text(&tagged).as_deref(), Some("masterpiece"));
/// # Ok(())
/// # }
/// ```
pub fn embed_text(png: &[u8], keyword: &str, text: &str) -> Result<Vec<u8>, EncodeError> {
    let body = chunk_sequence(png).ok_or(EncodeError::NotPng)?;
    let mut rest = body;
    let rest = loop {
        let (chunk, r) =
            read_chunk_from_slice(rest).map_err(|_| EncodeError::MissingImageHeader)?;
        if chunk.ty() == ChunkType::IHDR {
            break r;
        }
        rest = r;
    };
    let at = png.len() - rest.len();

    let mut data = Vec::with_capacity(keyword.len() + 1 + text.len());
    data.extend_from_slice(keyword.as_bytes());
    data.push(0);
    data.extend_from_slice(text.as_bytes());
    let chunk = RawChunk::from_data(ChunkType::tEXt, data);

    let mut out = Vec::with_capacity(png.len() + chunk.bytes_len());
    out.extend_from_slice(&png[..at]);
    out.extend_from_slice(&chunk.to_bytes());
    out.extend_from_slice(&png[at..]);
    Ok(out)
}

/// Returns a new PNG stream with every recognized text chunk removed.
///
/// A `tEXt` chunk is removed when its keyword is one of the recognized
/// [`TextKeyword`]s. Everything else survives verbatim, including bytes
/// after `IEND` and an unparseable trailing chunk; a stream without
/// recognized text chunks round trips unchanged.
pub fn strip_text(png: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let body = chunk_sequence(png).ok_or(EncodeError::NotPng)?;
    let mut out = Vec::with_capacity(png.len());
    out.extend_from_slice(&png[..png.len() - body.len()]);

    let mut rest = body;
    while let Ok((chunk, r)) = read_chunk_from_slice(rest) {
        let recognized = chunk.ty() == ChunkType::tEXt
            && TextKeyword::from_chunk_data(chunk.data()).is_some();
        if !recognized {
            out.extend_from_slice(&rest[..chunk.bytes_len()]);
        }
        rest = r;
        if chunk.ty() == ChunkType::IEND {
            break;
        }
    }
    out.extend_from_slice(rest);
    Ok(out)
}
