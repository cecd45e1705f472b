use thiserror::Error;

/// Errors from handling key material and signatures.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CryptoError {
    /// Key bytes did not match any recognized length or prefix.
    #[error("unrecognized key format ({len} bytes): {reason}")]
    KeyFormat {
        /// Length of the bytes we were given.
        len: usize,
        /// What was wrong with them.
        reason: String,
    },

    /// Signature bytes were neither compact nor DER.
    #[error("unrecognized signature format ({len} bytes): {reason}")]
    SignatureFormat {
        /// Length of the bytes we were given.
        len: usize,
        /// What was wrong with them.
        reason: String,
    },

    /// A public key was paired with a private key it doesn't belong to.
    #[error("public key does not match private key")]
    KeyMismatch,

    /// An exported key string could not be parsed.
    #[error("malformed key export: {0}")]
    MalformedExport(String),
}

impl CryptoError {
    pub(crate) fn key_format(len: usize, reason: impl ToString) -> Self {
        Self::KeyFormat {
            len,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn sig_format(len: usize, reason: impl ToString) -> Self {
        Self::SignatureFormat {
            len,
            reason: reason.to_string(),
        }
    }
}
