//! Key, signature and digest plumbing for VeriBlock transactions.
//!
//! Keys and signatures are accepted in every form the chain tooling passes
//! around.  Keys are normalized once on the way in, public keys to their
//! 88-byte ASN.1 form and private keys to 32 raw bytes.  Signatures keep the
//! exact `r` and `s` they were given, so either encoding reproduces the
//! input, and are only brought to low-S for verification.  The actual curve
//! math is secp256k1 via the `bitcoin` crate.

mod errors;
pub use errors::CryptoError;

mod hash;
pub use hash::sha256;

mod keys;
pub use keys::{
    KeyPair, PRIVATE_KEY_ASN1_PREFIX, PUBLIC_KEY_ASN1_PREFIX, PrivateKey, PublicKey, SigningKey,
};

mod signature;
pub use signature::{Signature, sign, verify};

mod export;
pub use export::{EXPORT_TAG, export_private_key, import_private_key};
