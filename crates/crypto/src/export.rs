//! Key export string consumed by the node's private key import command.
//!
//! The format is the tag `"40"`, then the hex ASN.1 private key, then the hex
//! ASN.1 public key.

use crate::errors::CryptoError;
use crate::keys::{KeyPair, PRIVATE_ASN1_LEN, PrivateKey, PublicKey};

/// Leading tag on an exported key.
pub const EXPORT_TAG: &str = "40";

/// Renders a key pair in the export format.
pub fn export_private_key(kp: &KeyPair) -> String {
    format!(
        "{EXPORT_TAG}{}{}",
        hex::encode(kp.private_key().to_asn1()),
        hex::encode(kp.public_key().to_asn1())
    )
}

/// Parses an exported key, checking that both halves belong together.
pub fn import_private_key(s: &str) -> Result<KeyPair, CryptoError> {
    let body = s
        .strip_prefix(EXPORT_TAG)
        .ok_or_else(|| CryptoError::MalformedExport(format!("missing {EXPORT_TAG} tag")))?;
    let buf = hex::decode(body).map_err(|e| CryptoError::MalformedExport(e.to_string()))?;

    if buf.len() <= PRIVATE_ASN1_LEN {
        return Err(CryptoError::MalformedExport(format!(
            "{} bytes is too short",
            buf.len()
        )));
    }

    let (priv_buf, pub_buf) = buf.split_at(PRIVATE_ASN1_LEN);
    let private_key = PrivateKey::from_bytes(priv_buf)?;
    let public_key = PublicKey::from_bytes(pub_buf)?;
    KeyPair::from_parts(private_key, public_key)
}
