use tracing::*;
use vbk_address::Address;
use vbk_crypto::{PublicKey, Signature, SigningKey, sha256, sign, verify};

use crate::errors::TxResult;
use crate::serialize::serialize_transaction_effects;
use crate::validate::TransactionEffects;

/// Transaction effects together with a signature over them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedTransaction {
    effects: TransactionEffects,
    signature_index: u64,
    tx_id: [u8; 32],
    signature: Signature,
    public_key: PublicKey,
}

impl SignedTransaction {
    /// Gets the signed effects.
    pub fn effects(&self) -> &TransactionEffects {
        &self.effects
    }

    /// Gets the signature index the signature commits to.
    pub fn signature_index(&self) -> u64 {
        self.signature_index
    }

    /// Gets the transaction ID, the SHA-256 of the signed message.
    pub fn tx_id(&self) -> &[u8; 32] {
        &self.tx_id
    }

    /// Gets the signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Gets the public key the signature checks against.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Re-serializes the effects and checks the ID, the signature, and for
    /// standard sources that the key owns the source address.
    pub fn verify(&self) -> bool {
        let msg = match serialize_transaction_effects(&self.effects, self.signature_index) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(%e, "failed to reserialize signed transaction");
                return false;
            }
        };

        if sha256(&msg) != self.tx_id {
            warn!("signed transaction ID mismatch");
            return false;
        }

        let source = self.effects.source_address();
        if !source.is_multisig() && Address::from_public_key(&self.public_key) != *source {
            warn!(%source, "public key does not own source address");
            return false;
        }

        verify(&self.tx_id, &self.signature, &self.public_key)
    }
}

/// Serializes and signs the effects.
pub fn sign_transaction(
    effects: &TransactionEffects,
    signature_index: u64,
    key: &SigningKey,
) -> TxResult<SignedTransaction> {
    let msg = serialize_transaction_effects(effects, signature_index)?;
    let tx_id = sha256(&msg);
    let signature = sign(&tx_id, key.private_key());

    debug!(
        tx_id = %hex::encode(tx_id),
        signature_index,
        len = msg.len(),
        "signed transaction"
    );

    Ok(SignedTransaction {
        effects: effects.clone(),
        signature_index,
        tx_id,
        signature,
        public_key: key.public_key(),
    })
}

#[cfg(test)]
mod tests {
    use vbk_codec::VarLenInt;
    use vbk_crypto::{KeyPair, PrivateKey};

    use super::*;
    use crate::{Output, TxType};

    fn key(b: u8) -> PrivateKey {
        PrivateKey::from_bytes(&[b; 32]).unwrap()
    }

    fn effects_from(sk: &PrivateKey) -> TransactionEffects {
        let source = Address::from_public_key(&sk.public_key());
        let dest = Address::from_public_key(&key(0x33).public_key());
        TransactionEffects::new(
            TxType::Standard,
            source,
            2000,
            vec![Output::new(dest, VarLenInt::new(1500))],
        )
        .unwrap()
    }

    #[test]
    fn test_sign_and_verify() {
        let sk = key(0x11);
        let fx = effects_from(&sk);

        let signed = sign_transaction(&fx, 1, &SigningKey::Raw(sk)).unwrap();
        assert!(signed.verify());
        assert_eq!(
            *signed.tx_id(),
            sha256(&serialize_transaction_effects(&fx, 1).unwrap())
        );

        // Both key shapes give the same signature.
        let again = sign_transaction(&fx, 1, &KeyPair::from_private(sk).into()).unwrap();
        assert_eq!(again, signed);
    }

    #[test]
    fn test_wrong_key_fails() {
        let fx = effects_from(&key(0x11));
        let signed = sign_transaction(&fx, 1, &SigningKey::Raw(key(0x22))).unwrap();
        assert!(!signed.verify());
    }

    #[test]
    fn test_tampered_index_fails() {
        let sk = key(0x11);
        let mut signed = sign_transaction(&effects_from(&sk), 1, &sk.into()).unwrap();
        signed.signature_index = 2;
        assert!(!signed.verify());
    }
}
