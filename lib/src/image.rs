mod header;
mod read;
mod write;

pub use header::PNG_SIGNATURE;
pub use read::{Chunks, extract_text, extract_text_with, read_as_chunks};
pub use write::{embed_text, strip_text};
