use vbk_codec::{Codec, Encoder, WriteStream};

use crate::errors::TxResult;
use crate::validate::TransactionEffects;

/// Serializes the effects and signature index into the exact message that
/// gets hashed and signed.
pub fn serialize_transaction_effects(
    effects: &TransactionEffects,
    signature_index: u64,
) -> TxResult<Vec<u8>> {
    let spend = effects.to_spend_effects(signature_index)?;

    let mut stream = WriteStream::with_capacity(128);
    spend.encode(&mut stream)?;

    // Reserved field, always empty.
    stream.write_length_prefixed(&[])?;

    Ok(stream.finalize())
}
