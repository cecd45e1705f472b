use thiserror::Error;
use vbk_codec::CodecError;
use vbk_crypto::CryptoError;

/// Errors from checking a proof record.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ProofError {
    /// Couldn't re-encode the signed transaction.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    /// The embedded key or signature is malformed.
    #[error("crypto: {0}")]
    Crypto(#[from] CryptoError),

    /// The signature doesn't check out against the transaction.
    #[error("signature does not verify")]
    BadSignature,
}
