mod crc;
mod read;
mod traits;
mod types;

use self::crc::Crc32;
pub(crate) use self::read::{ChunkReader, read_chunk_from_slice};
pub use self::{traits::*, types::*};
use std::{mem, ops::Deref};

/// Minimum required size of bytes to represent [`Chunk`].
/// length:4 + chunk type:4 + data:0 + crc:4
pub const MIN_CHUNK_BYTES_SIZE: usize =
    mem::size_of::<u32>() + mem::size_of::<ChunkType>() + mem::size_of::<u32>();

/// Represents a raw chunk
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RawChunk<D = Vec<u8>> {
    pub(crate) length: u32,
    pub(crate) ty: ChunkType,
    pub(crate) data: D,
    pub(crate) crc: u32,
}

impl<D> RawChunk<D>
where
    Self: Chunk,
{
    /// Whether the stored CRC matches the chunk type and data.
    ///
    /// Chunks read from a stream keep the CRC they declared; integrity is
    /// checked only on demand.
    #[inline]
    pub fn verify_crc(&self) -> bool {
        (self.ty(), self.data()).crc() == self.crc()
    }
}

impl RawChunk {
    /// Create a new [`RawChunk`] from given [`ChunkType`] and bytes.
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::{ChunkType, RawChunk, prelude::*};
    ///
    /// let data = [0xAA, 0xBB, 0xCC, 0xDD];
    /// let chunk = RawChunk::from_data(ChunkType::tEXt, data);
    ///
    /// assert_eq!(chunk.length(), 4);
    /// assert_eq!(chunk.ty(), ChunkType::tEXt);
    /// assert_eq!(chunk.data(), &[0xAA, 0xBB, 0xCC, 0xDD]);
    /// assert_eq!(chunk.crc(), 3279161587);
    /// ```
    #[inline]
    pub fn from_data<T: Into<Vec<u8>>>(ty: ChunkType, data: T) -> Self {
        #[inline]
        fn inner(ty: ChunkType, data: Vec<u8>) -> RawChunk {
            let chunk = (ty, &data[..]);
            RawChunk {
                length: chunk.length(),
                crc: chunk.crc(),
                ty,
                data,
            }
        }
        inner(ty, data.into())
    }
}

impl Chunk for RawChunk<&[u8]> {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl Chunk for RawChunk {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl<T: Deref<Target = [u8]>> Chunk for (ChunkType, T) {
    #[inline]
    fn ty(&self) -> ChunkType {
        self.0
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.1
    }
}

impl<T: Chunk> Chunk for &T {
    #[inline]
    fn length(&self) -> u32 {
        (*self).length()
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        (*self).ty()
    }

    #[inline]
    fn data(&self) -> &[u8] {
        (*self).data()
    }

    #[inline]
    fn crc(&self) -> u32 {
        (*self).crc()
    }
}

#[cfg(test)]
mod tests {
    use super::crc::crc32;
    use super::*;

    #[test]
    fn to_bytes() {
        let data = vec![0xAA, 0xBB, 0xCC, 0xDD];
        let chunk = RawChunk::from_data(ChunkType::tEXt, data);

        let bytes = chunk.to_bytes();

        assert_eq!(
            bytes,
            vec![
                0x00, 0x00, 0x00, 0x04, // chunk length (4)
                0x74, 0x45, 0x58, 0x74, // chunk type ("tEXt")
                0xAA, 0xBB, 0xCC, 0xDD, // data bytes
                0xC3, 0x74, 0x08, 0xF3, // CRC32 (calculated from chunk type and data)
            ]
        );
    }

    #[test]
    fn empty_chunk_bytes() {
        let chunk = RawChunk::from_data(ChunkType::IEND, []);
        assert_eq!(chunk.bytes_len(), MIN_CHUNK_BYTES_SIZE);
        assert_eq!(
            chunk.to_bytes(),
            vec![0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130]
        );
    }

    #[test]
    fn verify_declared_crc() {
        let chunk = RawChunk::from_data(ChunkType::IEND, []);
        assert!(chunk.verify_crc());

        let tampered = RawChunk {
            crc: chunk.crc ^ 1,
            ..chunk
        };
        assert!(!tampered.verify_crc());
    }

    #[test]
    fn one_shot_crc_matches_chunk_crc() {
        let chunk = RawChunk::from_data(ChunkType::IEND, []);
        assert_eq!(crc32(b"IEND"), chunk.crc());
    }
}
