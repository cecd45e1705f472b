//! Merkle inclusion paths.
//!
//! Both paths walk from the subject up, hashing with each layer's sibling on
//! the side given by the next bit of the index.

use bitcoin::hashes::{Hash, sha256d};
use serde::{Deserialize, Serialize};
use vbk_codec::{CountedVec, Prefixed, VarLenInt, impl_record_struct};
use vbk_crypto::sha256;

use crate::hash::Hash256;

fn fold_path(
    subject: &Hash256,
    layers: &[Prefixed<Hash256>],
    mut index: u64,
    hash: impl Fn(&[u8]) -> [u8; 32],
) -> Hash256 {
    let mut cursor = subject.0;
    let mut buf = [0; 64];
    for layer in layers {
        if index & 1 == 1 {
            buf[..32].copy_from_slice(&layer.0.0);
            buf[32..].copy_from_slice(&cursor);
        } else {
            buf[..32].copy_from_slice(&cursor);
            buf[32..].copy_from_slice(&layer.0.0);
        }
        cursor = hash(&buf);
        index >>= 1;
    }
    Hash256(cursor)
}

impl_record_struct! {
    /// Path from a transaction to a VeriBlock block's merkle root.
    ///
    /// The tree index says which of the block's transaction trees the
    /// subject is in.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct VbkMerklePath {
        tree_index: VarLenInt,
        index: VarLenInt,
        subject: Prefixed<Hash256>,
        layers: CountedVec<Prefixed<Hash256>>,
    }
}

impl VbkMerklePath {
    /// Computes the root the path commits to, with single SHA-256.
    pub fn compute_root(&self) -> Hash256 {
        fold_path(&self.subject, &self.layers, self.index.inner(), sha256)
    }
}

impl_record_struct! {
    /// Path from a transaction to a Bitcoin block's merkle root.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct BtcMerklePath {
        index: VarLenInt,
        subject: Prefixed<Hash256>,
        layers: CountedVec<Prefixed<Hash256>>,
    }
}

impl BtcMerklePath {
    /// Computes the root the path commits to, with double SHA-256 over
    /// internal byte order hashes.
    pub fn compute_root(&self) -> Hash256 {
        fold_path(&self.subject, &self.layers, self.index.inner(), |b| {
            sha256d::Hash::hash(b).to_byte_array()
        })
    }
}

#[cfg(test)]
mod tests {
    use vbk_codec::{decode_buf_exact, encode_to_vec};

    use super::*;

    fn h(b: u8) -> Prefixed<Hash256> {
        Prefixed(Hash256([b; 32]))
    }

    #[test]
    fn test_vbk_path_layout() {
        let path = VbkMerklePath::new(
            VarLenInt::new(1),
            VarLenInt::new(0),
            h(0xaa),
            CountedVec::from_vec(vec![h(0xbb)]).unwrap(),
        );

        let buf = encode_to_vec(&path).unwrap();
        assert_eq!(&buf[..5], &[1, 1, 1, 0, 32]);
        assert_eq!(buf[5], 0xaa);
        assert_eq!(&buf[37..40], &[1, 1, 32]);
        assert_eq!(buf.len(), 40 + 32);
        assert_eq!(decode_buf_exact::<VbkMerklePath>(&buf).unwrap(), path);
    }

    #[test]
    fn test_subject_must_be_32_bytes() {
        // Subject framed as 31 bytes.
        let mut buf = vec![1, 0, 31];
        buf.extend_from_slice(&[0; 31]);
        buf.extend_from_slice(&[1, 0]);
        assert!(decode_buf_exact::<BtcMerklePath>(&buf).unwrap_err().is_underflow());
    }

    #[test]
    fn test_btc_root_two_leaves() {
        let a = [0x01; 32];
        let b = [0x02; 32];
        let mut cat = [0u8; 64];
        cat[..32].copy_from_slice(&a);
        cat[32..].copy_from_slice(&b);
        let root = sha256d::Hash::hash(&cat).to_byte_array();

        let left = BtcMerklePath::new(
            VarLenInt::new(0),
            Prefixed(Hash256(a)),
            CountedVec::from_vec(vec![Prefixed(Hash256(b))]).unwrap(),
        );
        let right = BtcMerklePath::new(
            VarLenInt::new(1),
            Prefixed(Hash256(b)),
            CountedVec::from_vec(vec![Prefixed(Hash256(a))]).unwrap(),
        );
        assert_eq!(left.compute_root().0, root);
        assert_eq!(right.compute_root().0, root);
    }

    #[test]
    fn test_vbk_root_no_layers() {
        let path = VbkMerklePath::new(
            VarLenInt::new(0),
            VarLenInt::new(0),
            h(0x42),
            CountedVec::new(),
        );
        assert_eq!(path.compute_root(), Hash256([0x42; 32]));

        let one = VbkMerklePath::new(
            VarLenInt::new(0),
            VarLenInt::new(0),
            h(0x42),
            CountedVec::from_vec(vec![h(0x43)]).unwrap(),
        );
        let mut cat = [0x42u8; 64];
        cat[32..].fill(0x43);
        assert_eq!(one.compute_root().0, sha256(&cat));
    }
}
