use std::str::FromStr;
use thiserror::Error;

/// A `KEY=VALUE` pair given on the command line.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct KeyValuePair(pub(crate) String, pub(crate) String);

/// An error which can be returned when parsing a [`KeyValuePair`].
#[derive(Copy, Clone, Eq, PartialEq, Error, Debug)]
pub(crate) enum ParseKeyValuePairError {
    #[error("missing `=` separator")]
    MissingSeparator,
    #[error("key must not be empty")]
    EmptyKey,
}

impl FromStr for KeyValuePair {
    type Err = ParseKeyValuePairError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or(ParseKeyValuePairError::MissingSeparator)?;
        if key.is_empty() {
            return Err(ParseKeyValuePairError::EmptyKey);
        }
        Ok(Self(key.into(), value.into()))
    }
}
