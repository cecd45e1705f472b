//! Wire types making up the signed part of a transaction.

use serde::{Deserialize, Serialize};
use vbk_address::Address;
use vbk_codec::{Codec, CodecError, Decoder, Encoder, VarLenInt, impl_record_struct};

use crate::errors::ValidationError;

/// Most outputs a transaction can have, since the count is a single byte.
pub const MAX_OUTPUTS: usize = u8::MAX as usize;

/// Kind of transaction, the first byte of the signed message.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TxType {
    /// Plain value transfer.
    Standard = 0x01,

    /// Proof-of-proof publication.
    ProofOfProof = 0x02,

    /// Transfer out of a multisig address.
    Multisig = 0x03,
}

impl TryFrom<u8> for TxType {
    type Error = ValidationError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0x01 => Ok(Self::Standard),
            0x02 => Ok(Self::ProofOfProof),
            0x03 => Ok(Self::Multisig),
            _ => Err(ValidationError::UnknownTxType(v)),
        }
    }
}

impl From<TxType> for u8 {
    fn from(t: TxType) -> Self {
        t as u8
    }
}

impl Codec for TxType {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let tag = dec.read_u8()?;
        Self::try_from(tag).map_err(|_| CodecError::InvalidVariant { ty: "TxType", tag })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_u8(*self as u8)
    }
}

impl_record_struct! {
    /// Destination and amount.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct Output {
        address: Address,
        amount: VarLenInt,
    }
}

/// Outputs behind a single byte count.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Output>", into = "Vec<Output>")]
pub struct OutputList(Vec<Output>);

impl OutputList {
    /// Wraps a vec, if the count fits in a byte.
    pub fn from_vec(outputs: Vec<Output>) -> Result<Self, ValidationError> {
        if outputs.len() > MAX_OUTPUTS {
            return Err(ValidationError::TooManyOutputs(outputs.len()));
        }
        Ok(Self(outputs))
    }

    /// Gets the outputs.
    pub fn as_slice(&self) -> &[Output] {
        &self.0
    }

    /// Takes out the inner vec.
    pub fn into_inner(self) -> Vec<Output> {
        self.0
    }
}

impl TryFrom<Vec<Output>> for OutputList {
    type Error = ValidationError;

    fn try_from(v: Vec<Output>) -> Result<Self, Self::Error> {
        Self::from_vec(v)
    }
}

impl From<OutputList> for Vec<Output> {
    fn from(l: OutputList) -> Self {
        l.0
    }
}

impl Codec for OutputList {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let count = dec.read_u8()?;
        let mut outputs = Vec::with_capacity(count as usize);
        for _ in 0..count {
            outputs.push(Output::decode(dec)?);
        }
        Ok(Self(outputs))
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let count = u8::try_from(self.0.len()).map_err(|_| CodecError::OverflowContainer {
            len: self.0.len(),
            bound: MAX_OUTPUTS,
        })?;
        enc.write_u8(count)?;
        for o in &self.0 {
            o.encode(enc)?;
        }
        Ok(())
    }
}

impl_record_struct! {
    /// Everything a transaction spends and where it goes, in signing order.
    #[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
    pub struct SpendEffects {
        tx_type: TxType,
        source_address: Address,
        source_amount: VarLenInt,
        outputs: OutputList,
        signature_index: VarLenInt,
    }
}

#[cfg(test)]
mod tests {
    use vbk_codec::{decode_buf_exact, encode_to_vec};

    use super::*;

    const ADDR: &str = "VE8enbvu74CEZdkmwK9dQu3h5Dq978";

    #[test]
    fn test_tx_type_byte() {
        assert_eq!(encode_to_vec(&TxType::ProofOfProof).unwrap(), vec![2]);
        assert_eq!(decode_buf_exact::<TxType>(&[3]).unwrap(), TxType::Multisig);
        assert_eq!(
            decode_buf_exact::<TxType>(&[9]).unwrap_err(),
            CodecError::InvalidVariant {
                ty: "TxType",
                tag: 9
            }
        );
        assert_eq!(serde_json::to_string(&TxType::Standard).unwrap(), "1");
        assert!(serde_json::from_str::<TxType>("4").is_err());
    }

    #[test]
    fn test_output_list_bounds() {
        let out = Output::new(Address::parse(ADDR).unwrap(), VarLenInt::new(1));
        assert!(OutputList::from_vec(vec![out.clone(); 255]).is_ok());
        assert_eq!(
            OutputList::from_vec(vec![out.clone(); 256]).unwrap_err(),
            ValidationError::TooManyOutputs(256)
        );

        let list = OutputList::from_vec(vec![out; 2]).unwrap();
        let buf = encode_to_vec(&list).unwrap();
        assert_eq!(buf[0], 2);
        assert_eq!(decode_buf_exact::<OutputList>(&buf).unwrap(), list);
    }

    #[test]
    fn test_output_json() {
        let out = Output::new(Address::parse(ADDR).unwrap(), VarLenInt::new(1500));
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json, serde_json::json!({ "address": ADDR, "amount": 1500 }));
    }
}
