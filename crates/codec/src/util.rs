//! High-level util functions.

use crate::{Codec, CodecError, Decoder, ReadStream, WriteStream};

/// Decodes a value from a buffer, throwing an error if there's leftover bytes.
///
/// This is how externally bounded records are read: a record that doesn't
/// exactly fill its window is as bad as one that overruns it.
pub fn decode_buf_exact<T: Codec>(buf: &[u8]) -> Result<T, CodecError> {
    let mut dec = ReadStream::new(buf);
    let v = T::decode(&mut dec)?;
    if dec.remaining() > 0 {
        return Err(CodecError::ExtraInput(dec.remaining()));
    }
    Ok(v)
}

/// Encodes the value into a newly allocated vec.
pub fn encode_to_vec<T: Codec>(v: &T) -> Result<Vec<u8>, CodecError> {
    let mut stream = WriteStream::new();
    v.encode(&mut stream)?;
    Ok(stream.finalize())
}
