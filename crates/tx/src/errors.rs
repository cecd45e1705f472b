use thiserror::Error;
use vbk_address::AddressError;
use vbk_codec::CodecError;
use vbk_crypto::CryptoError;

/// A transaction field is outside what the chain accepts.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    /// Amount is negative or over the chain ceiling.
    #[error("{field} amount {value} out of range")]
    AmountOutOfRange {
        /// Which amount.
        field: &'static str,
        /// The value we were given.
        value: i128,
    },

    /// A single byte field got something that doesn't fit in a byte.
    #[error("{field} value {value} doesn't fit in a byte")]
    ByteOutOfRange {
        /// Which field.
        field: &'static str,
        /// The value we were given.
        value: u64,
    },

    /// Signature index is negative or over the ceiling.
    #[error("signature index {0} out of range")]
    IndexOutOfRange(i128),

    /// Type byte that isn't one of the known transaction types.
    #[error("unknown transaction type {0:#04x}")]
    UnknownTxType(u8),

    /// More outputs than the single byte count can express.
    #[error("too many outputs ({0})")]
    TooManyOutputs(usize),

    /// An address didn't pass validation.
    #[error("address: {0}")]
    InvalidAddress(#[from] AddressError),
}

/// Errors from building, serializing or signing transactions.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TxError {
    /// Fields failed validation.
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    /// Fields couldn't be written.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    /// Key material was bad.
    #[error("crypto: {0}")]
    Crypto(#[from] CryptoError),
}

/// Wrapper result type.
pub type TxResult<T> = Result<T, TxError>;
