//! Wire encoding of addresses.

use vbk_codec::{Codec, CodecError, Decoder, Encoder};

use crate::address::{Address, AddressKind};

/// Writes an address string: the ID byte of the first kind it validates as,
/// standard before multisig, then the length prefixed decoded payload.
pub fn write_address(enc: &mut impl Encoder, s: &str) -> Result<(), CodecError> {
    Address::parse(s)?.encode(enc)
}

/// Reads an address, re-validating it after re-encoding the payload.
pub fn read_address(dec: &mut impl Decoder) -> Result<Address, CodecError> {
    Address::decode(dec)
}

impl Codec for Address {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let id = dec.read_u8()?;
        let kind = AddressKind::from_id(id).ok_or(CodecError::InvalidVariant {
            ty: "Address",
            tag: id,
        })?;

        let payload = dec.read_length_prefixed()?;
        Ok(Address::from_payload(kind, &payload)?)
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let payload = self.to_payload()?;
        enc.write_u8(self.kind().id())?;
        enc.write_length_prefixed(&payload)
    }
}
