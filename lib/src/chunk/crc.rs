//! CRC-32 as used by PNG chunk trailers.
//!
//! Parameters are the ones fixed by the PNG container format: polynomial
//! `0xEDB88320`, reflected, initial and final XOR `0xFFFFFFFF`.
pub(crate) use crc32fast::Hasher as Crc32;

/// Computes the CRC-32 of `bytes` in a single call.
///
/// The empty sequence hashes to 0.
#[inline]
pub(crate) fn crc32(bytes: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(bytes);
    hasher.finalize()
}
