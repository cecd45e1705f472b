use thiserror::Error;
use vbk_codec::CodecError;

/// Errors from parsing or building addresses.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AddressError {
    /// The string is neither a valid standard nor a valid multisig address.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    /// A character outside the alphabet we were decoding with.
    #[error("invalid character {0:?} for alphabet")]
    InvalidCharacter(char),

    /// Bad parameters to build a multisig address from.
    #[error("invalid multisig parameters: {0}")]
    InvalidMultisig(String),
}

impl From<AddressError> for CodecError {
    fn from(e: AddressError) -> Self {
        CodecError::InvalidValue {
            ty: "Address",
            reason: e.to_string(),
        }
    }
}
