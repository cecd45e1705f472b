//! Length-framed byte blobs and sub-records.

use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::errors::CodecError;
use crate::types::{Codec, Decoder, Encoder, MAX_SHORT_LEN};
use crate::util::{decode_buf_exact, encode_to_vec};

/// Largest blob we accept behind a var-len frame, 1 MiB.
pub const MAX_LONG_LEN: usize = 1 << 20;

fn serialize_hex<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(bytes))
}

fn deserialize_hex<'de, D: Deserializer<'de>>(d: D, max: usize) -> Result<Vec<u8>, D::Error> {
    let s = String::deserialize(d)?;
    let bytes = hex::decode(&s).map_err(de::Error::custom)?;
    if bytes.len() > max {
        return Err(de::Error::invalid_length(bytes.len(), &"a shorter hex blob"));
    }
    Ok(bytes)
}

/// Byte blob behind a single length byte, so at most 255 bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ShortBytes(Vec<u8>);

impl ShortBytes {
    /// Wraps a vec, if it fits the length prefix.
    pub fn from_vec(inner: Vec<u8>) -> Option<Self> {
        if inner.len() > MAX_SHORT_LEN {
            return None;
        }
        Some(Self(inner))
    }

    /// Constructs an empty blob.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gets the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Takes out the inner vec.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ShortBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Codec for ShortBytes {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_length_prefixed().map(Self)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_length_prefixed(&self.0)
    }
}

impl Serialize for ShortBytes {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_hex(&self.0, s)
    }
}

impl<'de> Deserialize<'de> for ShortBytes {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        deserialize_hex(d, MAX_SHORT_LEN).map(Self)
    }
}

/// Byte blob behind a var-len frame, for fields that may exceed 255 bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LongBytes(Vec<u8>);

impl LongBytes {
    /// Wraps a vec, if it's within [`MAX_LONG_LEN`].
    pub fn from_vec(inner: Vec<u8>) -> Option<Self> {
        if inner.len() > MAX_LONG_LEN {
            return None;
        }
        Some(Self(inner))
    }

    /// Gets the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Takes out the inner vec.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for LongBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Codec for LongBytes {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_var_len_buffer(MAX_LONG_LEN).map(Self)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_var_len_buffer(&self.0)
    }
}

impl Serialize for LongBytes {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_hex(&self.0, s)
    }
}

impl<'de> Deserialize<'de> for LongBytes {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        deserialize_hex(d, MAX_LONG_LEN).map(Self)
    }
}

/// Sub-record framed by a single length byte.
///
/// Decoding reads the frame and requires the inner record to consume all of
/// it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefixed<T>(pub T);

impl<T> Prefixed<T> {
    /// Takes out the inner record.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Prefixed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<T> for Prefixed<T> {
    fn from(v: T) -> Self {
        Self(v)
    }
}

impl<T: Codec> Codec for Prefixed<T> {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let frame = dec.read_length_prefixed()?;
        decode_buf_exact(&frame).map(Self)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_length_prefixed(&encode_to_vec(&self.0)?)
    }
}

/// Sub-record framed by a var-len value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarPrefixed<T>(pub T);

impl<T> VarPrefixed<T> {
    /// Takes out the inner record.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for VarPrefixed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<T> for VarPrefixed<T> {
    fn from(v: T) -> Self {
        Self(v)
    }
}

impl<T: Codec> Codec for VarPrefixed<T> {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let frame = dec.read_var_len_buffer(MAX_LONG_LEN)?;
        decode_buf_exact(&frame).map(Self)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_var_len_buffer(&encode_to_vec(&self.0)?)
    }
}
