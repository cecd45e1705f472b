//! Binary encoding framework for the VeriBlock proof wire format.
//!
//! Records are built from a small set of field codecs: fixed-width
//! big-endian integers, raw byte arrays, single-byte length prefixed blobs,
//! [`VarLenInt`] minimal big-endian integers, and var-len framed blobs and
//! sub-records.  [`impl_record_struct`] ties them together into structs that
//! read and write their fields in declaration order.

mod errors;
pub use errors::CodecError;

mod types;
pub use types::{Codec, Decoder, Encoder, LeU32, MAX_SHORT_LEN};

mod stream;
pub use stream::{ReadStream, WriteStream};

mod varlen;
pub use varlen::{MAX_INT_BYTES, MAX_SIZE_BYTES, MAX_VAR_LEN_SIZE, VarLenInt, trim};

mod bytes;
pub use bytes::{LongBytes, MAX_LONG_LEN, Prefixed, ShortBytes, VarPrefixed};

mod counted_vec;
pub use counted_vec::CountedVec;

mod macros;

mod util;
pub use util::{decode_buf_exact, encode_to_vec};

#[cfg(test)]
mod tests;
