//! The ATV and VTB records themselves.

use serde::{Deserialize, Serialize};
use vbk_codec::{CountedVec, Prefixed, impl_record_struct};

use crate::block::VbkBlock;
use crate::errors::ProofError;
use crate::merkle::VbkMerklePath;
use crate::tx::{TxSignature, VbkPopTx, VbkTx};

impl_record_struct! {
    /// Places a VeriBlock transaction in a VeriBlock block, with the
    /// following blocks as context.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct VbkInclusionProof {
        merkle_path: VbkMerklePath,
        containing_block: Prefixed<VbkBlock>,
        context: CountedVec<Prefixed<VbkBlock>>,
    }
}

impl_record_struct! {
    /// Alt-chain transaction verification: proves alt-chain data was
    /// published in a VeriBlock transaction.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct Atv {
        version: u32,
        transaction: VbkTx,
        signature: TxSignature,
        proof: VbkInclusionProof,
    }
}

impl Atv {
    /// Checks the embedded signature against the encoded transaction.
    pub fn verify_signature(&self) -> Result<(), ProofError> {
        self.signature.verify_for(&self.transaction)
    }
}

impl_record_struct! {
    /// VeriBlock-to-Bitcoin: proves a VeriBlock block was published to
    /// Bitcoin by a proof-of-proof transaction.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct Vtb {
        version: u32,
        transaction: VbkPopTx,
        signature: TxSignature,
        proof: VbkInclusionProof,
    }
}

impl Vtb {
    /// Checks the embedded signature against the encoded transaction.
    pub fn verify_signature(&self) -> Result<(), ProofError> {
        self.signature.verify_for(&self.transaction)
    }
}
