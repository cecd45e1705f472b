//! Signature normalization and ECDSA over 32-byte digests.

use bitcoin::secp256k1::{Message, ecdsa};

use crate::errors::CryptoError;
use crate::keys::{PrivateKey, PublicKey, SECP};

const COMPACT_LEN: usize = 64;
const DER_TAG: u8 = 0x30;
const DER_MIN_LEN: usize = 68;
const DER_MAX_LEN: usize = 72;

/// ECDSA signature, held exactly as parsed.
///
/// Either encoding goes back out bit-for-bit, high-S or not.  Verification
/// normalizes a copy to low-S, which is the only form secp256k1 accepts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Signature(ecdsa::Signature);

impl Signature {
    /// Parses either a 64-byte compact `r || s` signature or a DER one.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, CryptoError> {
        let sig = match buf.len() {
            COMPACT_LEN => ecdsa::Signature::from_compact(buf),
            DER_MIN_LEN..=DER_MAX_LEN if buf[0] == DER_TAG => ecdsa::Signature::from_der(buf),
            len => return Err(CryptoError::sig_format(len, "neither compact nor DER")),
        }
        .map_err(|e| CryptoError::sig_format(buf.len(), e))?;

        Ok(Self(sig))
    }

    /// Returns the 64-byte compact form.
    pub fn to_compact(&self) -> [u8; COMPACT_LEN] {
        self.0.serialize_compact()
    }

    /// Returns the DER form.
    pub fn to_der(&self) -> Vec<u8> {
        self.0.serialize_der().to_vec()
    }
}

/// Signs a digest.
pub fn sign(digest: &[u8; 32], key: &PrivateKey) -> Signature {
    let msg = Message::from_digest(*digest);
    Signature(SECP.sign_ecdsa(&msg, key.inner()))
}

/// Checks a signature over a digest.
pub fn verify(digest: &[u8; 32], sig: &Signature, key: &PublicKey) -> bool {
    let msg = Message::from_digest(*digest);
    let mut low_s = sig.0;
    low_s.normalize_s();
    SECP.verify_ecdsa(&msg, &low_s, key.inner()).is_ok()
}
