use bitcoin::hashes::{Hash, sha256 as sha256_hash};

/// Single SHA-256 of a buffer.
pub fn sha256(buf: &[u8]) -> [u8; 32] {
    sha256_hash::Hash::hash(buf).to_byte_array()
}
