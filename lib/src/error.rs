use std::{
    error::Error,
    fmt::{Display, Formatter},
};

/// Errors that can occur while rewriting a PNG stream.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum EncodeError {
    /// The input does not start with the PNG signature.
    NotPng,
    /// The stream ended before an `IHDR` chunk was found.
    MissingImageHeader,
}

impl Display for EncodeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::NotPng => f.write_str("not a PNG stream"),
            EncodeError::MissingImageHeader => f.write_str("no IHDR chunk in stream"),
        }
    }
}

impl Error for EncodeError {}
