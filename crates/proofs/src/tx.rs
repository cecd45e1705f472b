//! Transactions carried by the proof records.

use bitcoin::hashes::{Hash, sha256d};
use serde::{Deserialize, Serialize};
use vbk_address::Address;
use vbk_codec::{
    CodecError, CountedVec, LongBytes, MAX_SHORT_LEN, Prefixed, ShortBytes, VarLenInt,
    VarPrefixed, encode_to_vec, impl_record_struct,
};
use vbk_crypto::{PublicKey, Signature, SigningKey, sha256, sign, verify};
use vbk_tx::{SpendEffects, TxType};

use crate::block::{BtcBlockHeader, VbkBlock};
use crate::errors::ProofError;
use crate::merkle::BtcMerklePath;

impl_record_struct! {
    /// Alt-chain data published by an ATV.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct PublicationData {
        identifier: VarLenInt,
        header: LongBytes,
        payout_info: LongBytes,
        context_info: LongBytes,
    }
}

impl_record_struct! {
    /// VeriBlock transaction publishing alt-chain data.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct VbkTx {
        effects: SpendEffects,
        publication_data: VarPrefixed<PublicationData>,
    }
    check = VbkTx::check_kind;
}

impl VbkTx {
    fn check_kind(&self) -> Result<(), CodecError> {
        if matches!(self.effects.tx_type(), TxType::ProofOfProof) {
            return Err(CodecError::InvalidValue {
                ty: "VbkTx",
                reason: "proof-of-proof type in an alt-chain publication".to_owned(),
            });
        }
        Ok(())
    }
}

impl_record_struct! {
    /// VeriBlock proof-of-proof transaction, publishing a VeriBlock block to
    /// Bitcoin with the Bitcoin context that proves it.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct VbkPopTx {
        tx_type: TxType,
        address: Address,
        published_block: Prefixed<VbkBlock>,
        bitcoin_transaction: LongBytes,
        merkle_path: BtcMerklePath,
        block_of_proof: Prefixed<BtcBlockHeader>,
        block_of_proof_context: CountedVec<Prefixed<BtcBlockHeader>>,
    }
    check = VbkPopTx::check_kind;
}

impl VbkPopTx {
    fn check_kind(&self) -> Result<(), CodecError> {
        if !matches!(self.tx_type, TxType::ProofOfProof) {
            return Err(CodecError::InvalidValue {
                ty: "VbkPopTx",
                reason: format!("type {:?} is not proof-of-proof", self.tx_type),
            });
        }
        Ok(())
    }

    /// Checks that the Bitcoin transaction is in the block of proof.
    pub fn check_merkle_path(&self) -> bool {
        let txid = sha256d::Hash::hash(&self.bitcoin_transaction).to_byte_array();
        self.merkle_path.subject().0.0 == txid
            && self.merkle_path.compute_root().0 == *self.block_of_proof.merkle_root()
    }
}

impl_record_struct! {
    /// Signature over a transaction with the key that made it.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct TxSignature {
        signature: ShortBytes,
        public_key: ShortBytes,
    }
}

impl TxSignature {
    /// Signs a digest, storing a DER signature and the ASN.1 public key.
    pub fn create(digest: &[u8; 32], key: &SigningKey) -> Result<Self, ProofError> {
        let sig = sign(digest, key.private_key()).to_der();
        let pk = key.public_key().to_asn1().to_vec();
        Ok(Self::new(short_blob(sig)?, short_blob(pk)?))
    }

    /// Signs the SHA-256 of an encoded transaction.
    pub fn create_for<T: vbk_codec::Codec>(tx: &T, key: &SigningKey) -> Result<Self, ProofError> {
        Self::create(&sha256(&encode_to_vec(tx)?), key)
    }

    /// Checks the signature over a digest.
    pub fn verify(&self, digest: &[u8; 32]) -> Result<(), ProofError> {
        let sig = Signature::from_bytes(&self.signature)?;
        let pk = PublicKey::from_bytes(&self.public_key)?;
        if !verify(digest, &sig, &pk) {
            return Err(ProofError::BadSignature);
        }
        Ok(())
    }

    /// Checks the signature over the SHA-256 of an encoded transaction.
    pub fn verify_for<T: vbk_codec::Codec>(&self, tx: &T) -> Result<(), ProofError> {
        self.verify(&sha256(&encode_to_vec(tx)?))
    }
}

fn short_blob(buf: Vec<u8>) -> Result<ShortBytes, CodecError> {
    let len = buf.len();
    ShortBytes::from_vec(buf).ok_or(CodecError::FieldTooLong {
        len,
        max: MAX_SHORT_LEN,
    })
}

#[cfg(test)]
mod tests {
    use vbk_codec::decode_buf_exact;
    use vbk_crypto::PrivateKey;

    use super::*;
    use crate::test_utils::{sample_atv, sample_vtb};

    #[test]
    fn test_publication_data_long_fields() {
        let pd = PublicationData::new(
            VarLenInt::new(0x3ae6ca),
            LongBytes::from_vec(vec![0xab; 300]).unwrap(),
            LongBytes::from_vec(vec![]).unwrap(),
            LongBytes::from_vec(vec![1, 2, 3]).unwrap(),
        );

        let buf = encode_to_vec(&pd).unwrap();
        assert_eq!(&buf[..4], &[3, 0x3a, 0xe6, 0xca]);
        assert_eq!(&buf[4..7], &[2, 0x01, 0x2c]);
        assert_eq!(&buf[307..], &[1, 0, 1, 3, 1, 2, 3]);
        assert_eq!(decode_buf_exact::<PublicationData>(&buf).unwrap(), pd);
    }

    #[test]
    fn test_signature_checks() {
        let key = SigningKey::Raw(PrivateKey::from_bytes(&[0x11; 32]).unwrap());
        let digest = sha256(b"tx");
        let sig = TxSignature::create(&digest, &key).unwrap();

        assert_eq!(sig.public_key().len(), 88);
        assert!(sig.verify(&digest).is_ok());
        assert_eq!(
            sig.verify(&sha256(b"other")).unwrap_err(),
            ProofError::BadSignature
        );

        let bad = TxSignature::new(
            ShortBytes::from_vec(vec![0; 10]).unwrap(),
            sig.public_key().clone(),
        );
        assert!(matches!(bad.verify(&digest), Err(ProofError::Crypto(_))));
    }

    #[test]
    fn test_short_blob_too_long() {
        assert_eq!(short_blob(vec![7; 255]).unwrap().len(), 255);
        assert_eq!(
            short_blob(vec![7; 256]).unwrap_err(),
            CodecError::FieldTooLong { len: 256, max: 255 }
        );
    }

    #[test]
    fn test_tx_type_tied_to_record_kind() {
        let atv = sample_atv();
        let vtb = sample_vtb(1);

        // A proof-of-proof type can't ride in an alt-chain publication.
        let fx = atv.transaction().effects();
        let pop_fx = SpendEffects::new(
            TxType::ProofOfProof,
            fx.source_address().clone(),
            *fx.source_amount(),
            fx.outputs().clone(),
            *fx.signature_index(),
        );
        let bad_atv_tx = VbkTx::new(pop_fx, atv.transaction().publication_data().clone());
        assert!(matches!(
            encode_to_vec(&bad_atv_tx).unwrap_err(),
            CodecError::InvalidValue { ty: "VbkTx", .. }
        ));

        // Same bytes with the type byte flipped fail to decode.
        let mut buf = encode_to_vec(atv.transaction()).unwrap();
        assert_eq!(buf[0], 1);
        buf[0] = 2;
        assert!(matches!(
            decode_buf_exact::<VbkTx>(&buf).unwrap_err(),
            CodecError::InvalidValue { ty: "VbkTx", .. }
        ));

        // And a publication of a VeriBlock block must say so.
        let mut buf = encode_to_vec(vtb.transaction()).unwrap();
        assert_eq!(buf[0], 2);
        for ty in [1, 3] {
            buf[0] = ty;
            assert!(matches!(
                decode_buf_exact::<VbkPopTx>(&buf).unwrap_err(),
                CodecError::InvalidValue { ty: "VbkPopTx", .. }
            ));
        }
        buf[0] = 2;
        assert_eq!(&decode_buf_exact::<VbkPopTx>(&buf).unwrap(), vtb.transaction());
    }
}
