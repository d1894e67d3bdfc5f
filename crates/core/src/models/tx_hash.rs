use crate::prelude::*;

/// Hex encoded hash of a submitted transaction, `0x` prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, AsRef, derive_more::Display)]
pub struct TxHash(String);

impl From<&str> for TxHash {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
