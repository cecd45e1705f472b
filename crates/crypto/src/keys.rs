//! Public and private key normalization.

use std::fmt;
use std::sync::LazyLock;

use bitcoin::secp256k1::{self, All, Secp256k1, SecretKey};

use crate::errors::CryptoError;

/// Shared curve context, only ever used immutably.
pub(crate) static SECP: LazyLock<Secp256k1<All>> = LazyLock::new(Secp256k1::new);

/// ASN.1 header in front of an uncompressed secp256k1 public key.
pub const PUBLIC_KEY_ASN1_PREFIX: [u8; 23] = [
    0x30, 0x56, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05, 0x2b,
    0x81, 0x04, 0x00, 0x0a, 0x03, 0x42, 0x00,
];

/// ASN.1 header in front of a raw secp256k1 private key.
pub const PRIVATE_KEY_ASN1_PREFIX: [u8; 32] = [
    0x30, 0x3e, 0x02, 0x01, 0x00, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01,
    0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a, 0x04, 0x27, 0x30, 0x25, 0x02, 0x01, 0x01, 0x04, 0x20,
];

const COMPRESSED_LEN: usize = 33;
const UNCOMPRESSED_LEN: usize = 65;
const PUBLIC_ASN1_LEN: usize = PUBLIC_KEY_ASN1_PREFIX.len() + UNCOMPRESSED_LEN;
const RAW_PRIVATE_LEN: usize = 32;
pub(crate) const PRIVATE_ASN1_LEN: usize = PRIVATE_KEY_ASN1_PREFIX.len() + RAW_PRIVATE_LEN;

/// secp256k1 public key.
///
/// Accepts the 88-byte ASN.1 form, the 65-byte uncompressed form and the
/// 33-byte compressed form, which all project back out identically.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PublicKey(secp256k1::PublicKey);

impl PublicKey {
    /// Parses a public key in any of the accepted forms.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, CryptoError> {
        let point = match buf.len() {
            PUBLIC_ASN1_LEN => {
                if buf[..PUBLIC_KEY_ASN1_PREFIX.len()] != PUBLIC_KEY_ASN1_PREFIX {
                    return Err(CryptoError::key_format(buf.len(), "bad ASN.1 prefix"));
                }
                &buf[PUBLIC_KEY_ASN1_PREFIX.len()..]
            }
            COMPRESSED_LEN | UNCOMPRESSED_LEN => buf,
            len => return Err(CryptoError::key_format(len, "not a public key length")),
        };

        secp256k1::PublicKey::from_slice(point)
            .map(Self)
            .map_err(|e| CryptoError::key_format(buf.len(), e))
    }

    /// Returns the 88-byte ASN.1 form.
    pub fn to_asn1(&self) -> [u8; PUBLIC_ASN1_LEN] {
        let mut out = [0; PUBLIC_ASN1_LEN];
        out[..PUBLIC_KEY_ASN1_PREFIX.len()].copy_from_slice(&PUBLIC_KEY_ASN1_PREFIX);
        out[PUBLIC_KEY_ASN1_PREFIX.len()..].copy_from_slice(&self.uncompressed());
        out
    }

    /// Returns the 33-byte compressed point.
    pub fn compressed(&self) -> [u8; COMPRESSED_LEN] {
        self.0.serialize()
    }

    /// Returns the 65-byte uncompressed point.
    pub fn uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        self.0.serialize_uncompressed()
    }

    pub(crate) fn inner(&self) -> &secp256k1::PublicKey {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_asn1()))
    }
}

/// secp256k1 private key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Parses a private key, either 32 raw bytes or the 64-byte ASN.1 form.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, CryptoError> {
        let raw = match buf.len() {
            PRIVATE_ASN1_LEN => {
                if buf[..PRIVATE_KEY_ASN1_PREFIX.len()] != PRIVATE_KEY_ASN1_PREFIX {
                    return Err(CryptoError::key_format(buf.len(), "bad ASN.1 prefix"));
                }
                &buf[PRIVATE_KEY_ASN1_PREFIX.len()..]
            }
            RAW_PRIVATE_LEN => buf,
            len => return Err(CryptoError::key_format(len, "not a private key length")),
        };

        SecretKey::from_slice(raw)
            .map(Self)
            .map_err(|e| CryptoError::key_format(buf.len(), e))
    }

    /// Returns the 32 raw bytes.
    pub fn to_raw(&self) -> [u8; RAW_PRIVATE_LEN] {
        self.0.secret_bytes()
    }

    /// Returns the 64-byte ASN.1 form.
    pub fn to_asn1(&self) -> [u8; PRIVATE_ASN1_LEN] {
        let mut out = [0; PRIVATE_ASN1_LEN];
        out[..PRIVATE_KEY_ASN1_PREFIX.len()].copy_from_slice(&PRIVATE_KEY_ASN1_PREFIX);
        out[PRIVATE_KEY_ASN1_PREFIX.len()..].copy_from_slice(&self.to_raw());
        out
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(secp256k1::PublicKey::from_secret_key(&*SECP, &self.0))
    }

    pub(crate) fn inner(&self) -> &SecretKey {
        &self.0
    }
}

/// Private key together with its public key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Builds a pair by deriving the public half.
    pub fn from_private(private_key: PrivateKey) -> Self {
        Self {
            public_key: private_key.public_key(),
            private_key,
        }
    }

    /// Builds a pair from both halves, checking they belong together.
    pub fn from_parts(private_key: PrivateKey, public_key: PublicKey) -> Result<Self, CryptoError> {
        if private_key.public_key() != public_key {
            return Err(CryptoError::KeyMismatch);
        }

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Gets the private half.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Gets the public half.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// Whatever a caller hands in to sign with.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SigningKey {
    /// Just the private key, the public key gets derived.
    Raw(PrivateKey),

    /// A pair that's already been put together.
    KeyPair(KeyPair),
}

impl SigningKey {
    /// Gets the private key to sign with.
    pub fn private_key(&self) -> &PrivateKey {
        match self {
            Self::Raw(k) => k,
            Self::KeyPair(kp) => kp.private_key(),
        }
    }

    /// Gets the public key signatures will verify against.
    pub fn public_key(&self) -> PublicKey {
        match self {
            Self::Raw(k) => k.public_key(),
            Self::KeyPair(kp) => *kp.public_key(),
        }
    }
}

impl From<PrivateKey> for SigningKey {
    fn from(k: PrivateKey) -> Self {
        Self::Raw(k)
    }
}

impl From<KeyPair> for SigningKey {
    fn from(kp: KeyPair) -> Self {
        Self::KeyPair(kp)
    }
}
