//! Length-prefixed minimal big-endian integers.
//!
//! This is not a base-128 varint.  A value is written as its shortest
//! big-endian representation behind a one-byte length, with zero taking a
//! single `0x00` content byte.
//!
//! ```txt
//! 0        -> 01 00
//! 255      -> 01 ff
//! 256      -> 02 01 00
//! u64::MAX -> 08 ff ff ff ff ff ff ff ff
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CodecError;
use crate::types::{Codec, Decoder, Encoder};

/// Largest content length accepted when reading a [`VarLenInt`].
pub const MAX_INT_BYTES: usize = 8;

/// Largest size-of-size accepted when reading a var-len buffer.
pub const MAX_SIZE_BYTES: usize = 4;

/// Largest buffer a var-len value can describe.
pub const MAX_VAR_LEN_SIZE: usize = u32::MAX as usize;

/// Produces the shortest big-endian representation of `n`, which is never
/// empty.
pub fn trim(n: u64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let first = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first..].to_vec()
}

/// Reassembles a big-endian integer from up to 8 bytes.
pub(crate) fn untrim(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

/// Checks a [`VarLenInt`] length byte before anything is consumed.
pub(crate) fn check_int_len(len: u8) -> Result<(), CodecError> {
    if len == 0 || len as usize > MAX_INT_BYTES {
        return Err(CodecError::MalformedInteger(len));
    }
    Ok(())
}

/// Non-negative integer in the length-prefixed minimal big-endian encoding.
///
/// Used for amounts, indexes and list counts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarLenInt(u64);

impl VarLenInt {
    /// Constructs a new instance.
    pub const fn new(v: u64) -> Self {
        Self(v)
    }

    /// Constructs a new instance from a usize.
    pub fn new_usize(v: usize) -> Self {
        Self(v as u64)
    }

    /// Converts to inner value.
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Returns the content bytes this value encodes to.
    pub fn trimmed(&self) -> Vec<u8> {
        trim(self.0)
    }

    /// Convenience function for returning the encoded length in bytes,
    /// including the length byte.
    pub fn byte_len(&self) -> usize {
        1 + self.trimmed().len()
    }
}

impl From<u64> for VarLenInt {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<VarLenInt> for u64 {
    fn from(v: VarLenInt) -> Self {
        v.0
    }
}

impl Codec for VarLenInt {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_var_len_int()
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_var_len_int(*self)
    }
}
