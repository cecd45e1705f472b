use crate::CodecError;
use crate::varlen::{self, VarLenInt};

/// Max length expressible by a single-byte length prefix.
pub const MAX_SHORT_LEN: usize = u8::MAX as usize;

/// Generic codec trait for types that go between bytes in the VeriBlock wire
/// format.
pub trait Codec: Sized {
    /// Decodes self from a decoder.
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError>;

    /// Encodes self into an encoder.
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError>;
}

/// Generic decoder trait that reads inputs.
///
/// Implementations must leave their cursor untouched when a read fails.  The
/// provided compound reads rely on this, checking their full extent with
/// [`Decoder::peek_buf`] and [`Decoder::remaining`] before consuming anything.
pub trait Decoder {
    /// Reads a variable-size buf.  This does NOT include length tagging.
    fn read_buf(&mut self, into: &mut [u8]) -> Result<(), CodecError>;

    /// Reads a fixed size buf.  This does NOT include length tagging.
    fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], CodecError>;

    /// Copies out the next `into.len()` bytes without consuming them.
    fn peek_buf(&self, into: &mut [u8]) -> Result<(), CodecError>;

    /// Returns the number of bytes left to read.
    fn remaining(&self) -> usize;

    /// Copies out the next `N` bytes without consuming them.
    fn peek_arr<const N: usize>(&self) -> Result<[u8; N], CodecError> {
        let mut buf = [0; N];
        self.peek_buf(&mut buf)?;
        Ok(buf)
    }

    /// Reads one byte.
    fn read_u8(&mut self) -> Result<u8, CodecError> {
        let [b] = self.read_arr::<1>()?;
        Ok(b)
    }

    /// Reads a little-endian signed 16-bit integer.
    fn read_i16_le(&mut self) -> Result<i16, CodecError> {
        self.read_arr().map(i16::from_le_bytes)
    }

    /// Reads a little-endian unsigned 16-bit integer.
    fn read_u16_le(&mut self) -> Result<u16, CodecError> {
        self.read_arr().map(u16::from_le_bytes)
    }

    /// Reads the next `n` bytes.
    fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, CodecError> {
        if n > self.remaining() {
            return Err(CodecError::underflow(n, self.remaining()));
        }

        let mut buf = vec![0; n];
        self.read_buf(&mut buf)?;
        Ok(buf)
    }

    /// Reads one length byte, then that many bytes.
    fn read_length_prefixed(&mut self) -> Result<Vec<u8>, CodecError> {
        let [len] = self.peek_arr::<1>()?;
        let total = 1 + len as usize;
        if total > self.remaining() {
            return Err(CodecError::underflow(total, self.remaining()));
        }

        self.read_u8()?;
        self.read_bytes(len as usize)
    }

    /// Reads a length-prefixed minimal big-endian integer.
    fn read_var_len_int(&mut self) -> Result<VarLenInt, CodecError> {
        let [len] = self.peek_arr::<1>()?;
        varlen::check_int_len(len)?;

        let total = 1 + len as usize;
        if total > self.remaining() {
            return Err(CodecError::underflow(total, self.remaining()));
        }

        let bytes = self.read_length_prefixed()?;
        Ok(VarLenInt::new(varlen::untrim(&bytes)))
    }

    /// Reads a var-len value: a size-of-size byte, the trimmed big-endian
    /// size, then the content.  Sizes over `max` are rejected.
    fn read_var_len_buffer(&mut self, max: usize) -> Result<Vec<u8>, CodecError> {
        let [size_len] = self.peek_arr::<1>()?;
        if size_len == 0 || size_len as usize > varlen::MAX_SIZE_BYTES {
            return Err(CodecError::MalformedInteger(size_len));
        }

        let header_len = 1 + size_len as usize;
        let mut header = [0; 1 + varlen::MAX_SIZE_BYTES];
        self.peek_buf(&mut header[..header_len])?;

        let size = varlen::untrim(&header[1..header_len]) as usize;
        if size > max {
            return Err(CodecError::MalformedLength { size, max });
        }

        if header_len + size > self.remaining() {
            return Err(CodecError::underflow(header_len + size, self.remaining()));
        }

        self.read_bytes(header_len)?;
        self.read_bytes(size)
    }
}

/// Generic encoder trait that writes outputs.
pub trait Encoder {
    /// Writes a buf.  This does NOT include length tagging.
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError>;

    /// Writes one byte.
    fn write_u8(&mut self, v: u8) -> Result<(), CodecError> {
        self.write_buf(&[v])
    }

    /// Writes a little-endian signed 16-bit integer.
    fn write_i16_le(&mut self, v: i16) -> Result<(), CodecError> {
        self.write_buf(&v.to_le_bytes())
    }

    /// Writes a little-endian unsigned 16-bit integer.
    fn write_u16_le(&mut self, v: u16) -> Result<(), CodecError> {
        self.write_buf(&v.to_le_bytes())
    }

    /// Writes a single length byte, then the buf.
    fn write_length_prefixed(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        if buf.len() > MAX_SHORT_LEN {
            return Err(CodecError::FieldTooLong {
                len: buf.len(),
                max: MAX_SHORT_LEN,
            });
        }

        self.write_u8(buf.len() as u8)?;
        self.write_buf(buf)
    }

    /// Writes a length-prefixed minimal big-endian integer.
    fn write_var_len_int(&mut self, v: VarLenInt) -> Result<(), CodecError> {
        self.write_length_prefixed(&varlen::trim(v.inner()))
    }

    /// Writes a var-len value, the mirror of [`Decoder::read_var_len_buffer`].
    fn write_var_len_buffer(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        if buf.len() > varlen::MAX_VAR_LEN_SIZE {
            return Err(CodecError::FieldTooLong {
                len: buf.len(),
                max: varlen::MAX_VAR_LEN_SIZE,
            });
        }

        self.write_length_prefixed(&varlen::trim(buf.len() as u64))?;
        self.write_buf(buf)
    }
}

/// Encoding to a vec buffer.
impl Encoder for Vec<u8> {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Impl for byte arrays.
impl<const N: usize> Codec for [u8; N] {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_arr::<N>()
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(self)
    }
}

impl Codec for bool {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match dec.peek_arr::<1>()? {
            [0] => dec.read_u8().map(|_| false),
            [1] => dec.read_u8().map(|_| true),
            [tag] => Err(CodecError::InvalidVariant { ty: "bool", tag }),
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_u8(if *self { 1 } else { 0 })
    }
}

/// Simple macro to wrap the fixed size int types, not much to see.
macro_rules! impl_int_codec {
    ( $ity:ident $bytes:literal ) => {
        impl Codec for $ity {
            fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
                let arr: [u8; $bytes] = dec.read_arr()?;
                Ok(<$ity>::from_be_bytes(arr))
            }

            fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
                enc.write_buf(&self.to_be_bytes())
            }
        }
    };
}

impl_int_codec!(u8 1);
impl_int_codec!(i8 1);
impl_int_codec!(u16 2);
impl_int_codec!(i16 2);
impl_int_codec!(u32 4);
impl_int_codec!(i32 4);
impl_int_codec!(u64 8);
impl_int_codec!(i64 8);

/// Little-endian `u32`, as used inside Bitcoin block headers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LeU32(pub u32);

impl Codec for LeU32 {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_arr().map(u32::from_le_bytes).map(Self)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&self.0.to_le_bytes())
    }
}
