//! A library for embedding and extracting PNG text metadata
//!
//! This library carries an application defined text payload inside a PNG
//! image as a standard `tEXt` chunk. Rewrites insert or remove single chunks
//! and leave every other byte of the image untouched; extraction walks the
//! chunk sequence without ever decoding pixel data.
//!
//! ```
//! use libpngmeta::prelude::*;
//! use libpngmeta::{ChunkType, PNG_SIGNATURE, RawChunk, embed_text, extract_text};
//!
//! # fn main() -> Result<(), libpngmeta::EncodeError> {
//! let mut png = PNG_SIGNATURE.to_vec();
//! png.extend_from_slice(&RawChunk::from_data(ChunkType::IHDR, vec![0; 13]).to_bytes());
//! png.extend_from_slice(&RawChunk::from_data(ChunkType::IEND, []).to_bytes());
//!
//! let tagged = embed_text(&png, "BananaProData", r#"{"mega":"a castle"}"#)?;
//! assert_eq!(extract_text(&tagged).as_deref(), Some(r#"{"mega":"a castle"}"#));
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/libpngmeta/0.1.0")]
pub(crate) mod chunk;
pub(crate) mod error;
pub(crate) mod image;
pub(crate) mod keyword;
pub mod prelude;

pub use chunk::*;
pub use error::*;
pub use image::*;
pub use keyword::*;
