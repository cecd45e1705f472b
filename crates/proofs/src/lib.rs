//! ATV and VTB proof records.
//!
//! Both records share their tail: a signature over the embedded transaction
//! and a [`VbkInclusionProof`] placing that transaction in a VeriBlock block.
//! They differ in the transaction, an ATV carries a [`VbkTx`] publishing
//! alt-chain data while a VTB carries a [`VbkPopTx`] publishing a VeriBlock
//! block to Bitcoin along with the Bitcoin context proving it.
//!
//! Every record is declared with [`vbk_codec::impl_record_struct`], so the
//! field order in the struct is the wire order.

// Only used by the integration tests.
#[cfg(test)]
use proptest as _;
#[cfg(test)]
use vbk_codec_tests as _;

mod errors;
pub use errors::ProofError;

mod hash;
pub use hash::Hash256;

mod block;
pub use block::{BTC_HEADER_LEN, BtcBlockHeader, VBK_BLOCK_LEN, VbkBlock};

mod merkle;
pub use merkle::{BtcMerklePath, VbkMerklePath};

mod tx;
pub use tx::{PublicationData, TxSignature, VbkPopTx, VbkTx};

mod records;
pub use records::{Atv, VbkInclusionProof, Vtb};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
