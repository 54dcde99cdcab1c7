use crate::chunk::{ChunkType, RawChunk};
use std::{
    io::{self, Read},
    mem,
};

pub(crate) struct ChunkReader<R> {
    pub(crate) r: R,
}

impl<R> From<R> for ChunkReader<R> {
    #[inline]
    fn from(reader: R) -> Self {
        Self { r: reader }
    }
}

impl<R: Read> ChunkReader<R> {
    /// Reads the next chunk, or `None` at a clean end of stream.
    ///
    /// The CRC field is stored as declared; it is not checked against the
    /// chunk contents.
    pub(crate) fn read_chunk(&mut self) -> io::Result<Option<RawChunk>> {
        // read chunk length
        let mut length = [0u8; mem::size_of::<u32>()];
        if !self.fill(&mut length)? {
            return Ok(None);
        }
        let length = u32::from_be_bytes(length);

        // read a chunk type
        let mut ty = [0u8; mem::size_of::<ChunkType>()];
        self.r.read_exact(&mut ty)?;

        // read chunk data
        let mut data = vec![0; length as usize];
        self.r.read_exact(&mut data)?;

        // read crc sum
        let mut crc = [0u8; mem::size_of::<u32>()];
        self.r.read_exact(&mut crc)?;
        let crc = u32::from_be_bytes(crc);

        Ok(Some(RawChunk {
            length,
            ty: ChunkType(ty),
            data,
            crc,
        }))
    }

    /// Fills `buf` completely, distinguishing a stream that ends before the
    /// first byte (`Ok(false)`) from one that ends inside the buffer.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<bool> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.r.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(false),
                Ok(0) => return Err(io::ErrorKind::UnexpectedEof.into()),
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(true)
    }
}

/// Reads one chunk off the front of `bytes`, returning it and the remainder.
///
/// The declared CRC is kept as-is; truncated input is an `UnexpectedEof`.
pub(crate) fn read_chunk_from_slice(bytes: &[u8]) -> io::Result<(RawChunk<&[u8]>, &[u8])> {
    // read chunk length
    let (length, r) = bytes
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or(io::ErrorKind::UnexpectedEof)?;
    let length = u32::from_be_bytes(*length);

    // read a chunk type
    let (ty, r) = r
        .split_first_chunk::<{ mem::size_of::<ChunkType>() }>()
        .ok_or(io::ErrorKind::UnexpectedEof)?;

    // read chunk data
    let (data, r) = r
        .split_at_checked(length as usize)
        .ok_or(io::ErrorKind::UnexpectedEof)?;

    // read crc sum
    let (crc, r) = r
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or(io::ErrorKind::UnexpectedEof)?;
    let crc = u32::from_be_bytes(*crc);

    Ok((
        RawChunk {
            length,
            ty: ChunkType(*ty),
            data,
            crc,
        },
        r,
    ))
}
