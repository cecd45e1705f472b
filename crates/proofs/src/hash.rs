use std::fmt;

use serde::{Deserialize, Serialize};
use vbk_codec::impl_wrapper_codec;

/// 32-byte hash, projected as hex.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash256(#[serde(with = "hex::serde")] pub [u8; 32]);

impl_wrapper_codec!(Hash256 => [u8; 32]);

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(v: [u8; 32]) -> Self {
        Self(v)
    }
}
