//! A downstream crate hand-writing a `Codec` and testing it with
//! `generate_codec_tests!`.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use vbk_codec_tests::{
    generate_codec_tests,
    proptest::{collection::vec, option, prelude::*},
    vbk_codec::{Codec, CodecError, Decoder, Encoder, VarLenInt, encode_to_vec},
};

/// Payout note, with an optional memo behind a presence byte.
#[derive(Debug, Clone, PartialEq)]
struct Payout {
    amount: u64,
    recipient: Vec<u8>,
    memo: Option<Vec<u8>>,
}

impl Codec for Payout {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let amount = dec.read_var_len_int()?.inner();
        let recipient = dec.read_length_prefixed()?;
        let memo = match bool::decode(dec)? {
            true => Some(dec.read_var_len_buffer(1024)?),
            false => None,
        };
        Ok(Self {
            amount,
            recipient,
            memo,
        })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_var_len_int(VarLenInt::new(self.amount))?;
        enc.write_length_prefixed(&self.recipient)?;
        self.memo.is_some().encode(enc)?;
        if let Some(memo) = &self.memo {
            enc.write_var_len_buffer(memo)?;
        }
        Ok(())
    }
}

impl Arbitrary for Payout {
    type Parameters = ();
    type Strategy = BoxedStrategy<Payout>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            any::<u64>(),
            vec(any::<u8>(), 0..=255),
            option::of(vec(any::<u8>(), 0..300)),
        )
            .prop_map(|(amount, recipient, memo)| Payout {
                amount,
                recipient,
                memo,
            })
            .boxed()
    }
}

generate_codec_tests!(Payout, "payout");

#[test]
fn test_payout_layout() {
    let p = Payout {
        amount: 500,
        recipient: vec![0xaa, 0xbb],
        memo: None,
    };
    let buf = encode_to_vec(&p).unwrap();
    assert_eq!(buf, vec![2, 0x01, 0xf4, 2, 0xaa, 0xbb, 0]);
}
