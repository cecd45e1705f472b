//! Deterministic sample records, signed with a fixed key.

use bitcoin::hashes::{Hash, sha256d};
use vbk_address::Address;
use vbk_codec::{CountedVec, LeU32, LongBytes, Prefixed, VarLenInt, VarPrefixed};
use vbk_crypto::{PrivateKey, SigningKey};
use vbk_tx::{OutputList, SpendEffects, TxType};

use crate::{
    Atv, BtcBlockHeader, BtcMerklePath, Hash256, PublicationData, TxSignature, VbkBlock,
    VbkInclusionProof, VbkMerklePath, VbkPopTx, VbkTx, Vtb,
};

/// Key every sample is signed with.
pub fn signing_key() -> SigningKey {
    SigningKey::Raw(PrivateKey::from_bytes(&[0x11; 32]).expect("test: valid key"))
}

/// Address of [`signing_key`].
pub fn source_address() -> Address {
    Address::from_public_key(&signing_key().public_key())
}

/// VeriBlock block header at some height.
pub fn sample_vbk_block(height: i32) -> VbkBlock {
    let b = height as u8;
    VbkBlock::new(
        height,
        2,
        [b; 12],
        [b.wrapping_add(1); 9],
        [b.wrapping_add(2); 9],
        [b.wrapping_add(3); 16],
        1_553_699_000 + height,
        16_842_752,
        height.wrapping_mul(31),
    )
}

/// Bitcoin header with a given merkle root.
pub fn sample_btc_header(nonce: u32, merkle_root: [u8; 32]) -> BtcBlockHeader {
    BtcBlockHeader::new(
        LeU32(0x2000_0000),
        [nonce as u8; 32],
        merkle_root,
        LeU32(1_553_697_485),
        LeU32(0x1d00_ffff),
        LeU32(nonce),
    )
}

/// Inclusion proof with a couple of layers and context blocks.
pub fn sample_inclusion_proof(seed: u8) -> VbkInclusionProof {
    let h = |b: u8| Prefixed(Hash256([b; 32]));
    let path = VbkMerklePath::new(
        VarLenInt::new(1),
        VarLenInt::new(u64::from(seed)),
        h(seed),
        CountedVec::from_vec(vec![h(seed ^ 0x55), h(seed ^ 0xaa)]).expect("test: small vec"),
    );

    let height = 5000 + i32::from(seed);
    let context = (1..=2)
        .map(|i| Prefixed(sample_vbk_block(height + i)))
        .collect();

    VbkInclusionProof::new(
        path,
        Prefixed(sample_vbk_block(height)),
        CountedVec::from_vec(context).expect("test: small vec"),
    )
}

/// Signed ATV publishing some alt-chain header.
pub fn sample_atv() -> Atv {
    let effects = SpendEffects::new(
        TxType::Standard,
        source_address(),
        VarLenInt::new(1000),
        OutputList::default(),
        VarLenInt::new(7),
    );

    let publication = PublicationData::new(
        VarLenInt::new(0x3ae6ca),
        LongBytes::from_vec(b"alt chain header".repeat(20)).expect("test: small blob"),
        LongBytes::from_vec(vec![0x01, 0x02]).expect("test: small blob"),
        LongBytes::from_vec(vec![]).expect("test: small blob"),
    );

    let tx = VbkTx::new(effects, VarPrefixed(publication));
    let signature = TxSignature::create_for(&tx, &signing_key()).expect("test: sign");
    Atv::new(1, tx, signature, sample_inclusion_proof(3))
}

/// Signed VTB whose Bitcoin merkle path is consistent with its block of
/// proof.
pub fn sample_vtb(seed: u8) -> Vtb {
    let btc_tx = vec![seed; 120];
    let txid = sha256d::Hash::hash(&btc_tx).to_byte_array();

    let path = BtcMerklePath::new(
        VarLenInt::new(0),
        Prefixed(Hash256(txid)),
        CountedVec::from_vec(vec![Prefixed(Hash256([seed ^ 0xff; 32]))])
            .expect("test: small vec"),
    );
    let root = path.compute_root();

    let context = (1..=u32::from(seed % 3))
        .map(|i| Prefixed(sample_btc_header(i, [i as u8; 32])))
        .collect();

    let tx = VbkPopTx::new(
        TxType::ProofOfProof,
        source_address(),
        Prefixed(sample_vbk_block(4000 + i32::from(seed))),
        LongBytes::from_vec(btc_tx).expect("test: small blob"),
        path,
        Prefixed(sample_btc_header(u32::from(seed), root.0)),
        CountedVec::from_vec(context).expect("test: small vec"),
    );

    let signature = TxSignature::create_for(&tx, &signing_key()).expect("test: sign");
    Vtb::new(2, tx, signature, sample_inclusion_proof(seed))
}
