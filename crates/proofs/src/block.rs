//! Block headers of both chains.

use bitcoin::block::{Header, Version};
use bitcoin::hashes::Hash;
use bitcoin::{BlockHash, CompactTarget, TxMerkleNode};
use serde::{Deserialize, Serialize};
use vbk_codec::{LeU32, impl_record_struct};

/// Encoded size of a VeriBlock block header.
pub const VBK_BLOCK_LEN: usize = 64;

/// Encoded size of a Bitcoin block header.
pub const BTC_HEADER_LEN: usize = 80;

impl_record_struct! {
    /// VeriBlock block header, big-endian throughout.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct VbkBlock {
        height: i32,
        version: i16,
        #[serde(with = "hex::serde")]
        previous_block: [u8; 12],
        #[serde(with = "hex::serde")]
        previous_keystone: [u8; 9],
        #[serde(with = "hex::serde")]
        second_previous_keystone: [u8; 9],
        #[serde(with = "hex::serde")]
        merkle_root: [u8; 16],
        timestamp: i32,
        difficulty: i32,
        nonce: i32,
    }
}

impl_record_struct! {
    /// Bitcoin block header, in its little-endian consensus layout.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct BtcBlockHeader {
        version: LeU32,
        #[serde(with = "hex::serde")]
        previous_block: [u8; 32],
        #[serde(with = "hex::serde")]
        merkle_root: [u8; 32],
        timestamp: LeU32,
        bits: LeU32,
        nonce: LeU32,
    }
}

impl BtcBlockHeader {
    /// Converts to the `bitcoin` crate's header.
    pub fn to_header(&self) -> Header {
        Header {
            version: Version::from_consensus(self.version.0 as i32),
            prev_blockhash: BlockHash::from_byte_array(self.previous_block),
            merkle_root: TxMerkleNode::from_byte_array(self.merkle_root),
            time: self.timestamp.0,
            bits: CompactTarget::from_consensus(self.bits.0),
            nonce: self.nonce.0,
        }
    }

    /// Double SHA-256 of the header.
    pub fn block_hash(&self) -> BlockHash {
        self.to_header().block_hash()
    }
}

impl From<Header> for BtcBlockHeader {
    fn from(h: Header) -> Self {
        Self::new(
            LeU32(h.version.to_consensus() as u32),
            h.prev_blockhash.to_byte_array(),
            h.merkle_root.to_byte_array(),
            LeU32(h.time),
            LeU32(h.bits.to_consensus()),
            LeU32(h.nonce),
        )
    }
}

#[cfg(test)]
mod tests {
    use vbk_codec::{decode_buf_exact, encode_to_vec};

    use super::*;

    const GENESIS: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c";

    #[test]
    fn test_btc_genesis() {
        let buf = hex::decode(GENESIS).unwrap();
        assert_eq!(buf.len(), BTC_HEADER_LEN);

        let h: BtcBlockHeader = decode_buf_exact(&buf).unwrap();
        assert_eq!(h.version().0, 1);
        assert_eq!(h.timestamp().0, 1231006505);
        assert_eq!(h.bits().0, 0x1d00ffff);
        assert_eq!(h.nonce().0, 2083236893);
        assert_eq!(
            h.block_hash().to_string(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );

        let theirs: Header = bitcoin::consensus::deserialize(&buf).unwrap();
        assert_eq!(h.to_header(), theirs);
        assert_eq!(BtcBlockHeader::from(theirs), h);
        assert_eq!(encode_to_vec(&h).unwrap(), buf);
    }

    fn vbk_block() -> VbkBlock {
        VbkBlock::new(
            5000,
            2,
            [0x11; 12],
            [0x22; 9],
            [0x33; 9],
            [0x44; 16],
            1_553_699_059,
            16_842_752,
            -1,
        )
    }

    #[test]
    fn test_vbk_block_layout() {
        let buf = encode_to_vec(&vbk_block()).unwrap();
        assert_eq!(buf.len(), VBK_BLOCK_LEN);
        assert_eq!(&buf[..6], &[0x00, 0x00, 0x13, 0x88, 0x00, 0x02]);
        assert_eq!(&buf[60..], &[0xff; 4]);
        assert_eq!(decode_buf_exact::<VbkBlock>(&buf).unwrap(), vbk_block());
    }

    #[test]
    fn test_vbk_block_json() {
        let json = serde_json::to_value(vbk_block()).unwrap();
        assert_eq!(json["height"], 5000);
        assert_eq!(json["previous_block"], "111111111111111111111111");
        assert_eq!(json["merkle_root"], "44".repeat(16));
        assert_eq!(
            serde_json::from_value::<VbkBlock>(json).unwrap(),
            vbk_block()
        );
    }
}
