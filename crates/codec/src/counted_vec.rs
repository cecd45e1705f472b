//! Repeated sub-records behind a [`VarLenInt`] count.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::errors::CodecError;
use crate::types::{Codec, Decoder, Encoder};
use crate::varlen::VarLenInt;

/// Vec whose length is written as a [`VarLenInt`] ahead of the entries.
///
/// The `BOUND` const generic caps how many entries we accept, which is
/// checked against the declared count before anything is allocated.  The
/// default is `u32::MAX`, in practice limited by the remaining input since
/// every entry takes at least one byte.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CountedVec<T, const BOUND: u32 = { u32::MAX }> {
    inner: Vec<T>,
}

impl<T, const BOUND: u32> CountedVec<T, BOUND> {
    /// Convenience function to construct a new instance without doing the
    /// bounds checking.
    fn new_unchecked(inner: Vec<T>) -> Self {
        Self { inner }
    }

    /// Constructs a new empty vec.
    pub fn new() -> Self {
        Self::new_unchecked(Vec::new())
    }

    /// Returns the effective max size for this type.
    pub const fn max_len() -> usize {
        BOUND as usize
    }

    /// Wraps another vec, but only if it's in bounds.
    pub fn from_vec(inner: Vec<T>) -> Option<Self> {
        if inner.len() > Self::max_len() {
            return None;
        }

        Some(Self::new_unchecked(inner))
    }

    /// Gets an ref to the inner vec.
    pub fn inner(&self) -> &Vec<T> {
        &self.inner
    }

    /// Takes out the inner vec.
    pub fn into_inner(self) -> Vec<T> {
        self.inner
    }

    /// Gets the len of the vec.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns if the vec is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pushes a new element, if there's space for it.
    pub fn push(&mut self, v: T) -> bool {
        if self.inner.len() + 1 > Self::max_len() {
            return false;
        }

        self.inner.push(v);
        true
    }

    /// Iterates over each item.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }

    /// Gets a slice of the entries in the vec.
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }
}

impl<T, const BOUND: u32> Default for CountedVec<T, BOUND> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const BOUND: u32> std::ops::Deref for CountedVec<T, BOUND> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Codec, const BOUND: u32> Codec for CountedVec<T, BOUND> {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let len = VarLenInt::decode(dec)?.inner();

        // Check against the effective max length.
        if len > Self::max_len() as u64 {
            return Err(CodecError::OverflowContainer {
                len: len as usize,
                bound: Self::max_len(),
            });
        }

        // Every entry takes at least a byte, so don't trust the count further
        // than the input could back it up.
        let len_usize = len as usize;
        let mut vec = Vec::with_capacity(len_usize.min(dec.remaining()));
        for _ in 0..len_usize {
            vec.push(T::decode(dec)?);
        }

        Ok(Self { inner: vec })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        VarLenInt::new_usize(self.inner.len()).encode(enc)?;

        for item in &self.inner {
            item.encode(enc)?;
        }

        Ok(())
    }
}

impl<T: Serialize, const BOUND: u32> Serialize for CountedVec<T, BOUND> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(s)
    }
}

impl<'de, T: Deserialize<'de>, const BOUND: u32> Deserialize<'de> for CountedVec<T, BOUND> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let inner = Vec::<T>::deserialize(d)?;
        let len = inner.len();
        Self::from_vec(inner).ok_or_else(|| de::Error::invalid_length(len, &"a bounded list"))
    }
}
