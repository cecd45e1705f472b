use bitcoin::ScriptBuf;
use vbk_codec::{Encoder, encode_to_vec};
use vbk_proofs::{Atv, Vtb};

use crate::errors::{PopScriptError, PopScriptResult};
use crate::opcodes::{MAX_PUSHDATA2_LEN, OP_CHECKATV, OP_CHECKPOP, OP_CHECKVTB, OP_PUSHDATA2};

/// Builds the script carrying an ATV and its VTBs.
///
/// ```text
/// OP_PUSHDATA2 <len> <atv> OP_CHECKATV
/// OP_PUSHDATA2 <len> <vtb_0> OP_CHECKVTB
/// ...
/// OP_CHECKPOP
/// ```
///
/// Every payload goes through `OP_PUSHDATA2`, even ones a shorter push could
/// carry, since that's the only push the extractor recognizes.
///
/// # Errors
///
/// Returns [`PopScriptError`] if a record fails to encode or encodes to more
/// than 65535 bytes.
pub fn build_pop_script(atv: &Atv, vtbs: &[Vtb]) -> PopScriptResult<ScriptBuf> {
    let mut buf = Vec::new();
    push_payload(&mut buf, &encode_to_vec(atv)?, OP_CHECKATV)?;

    for vtb in vtbs {
        push_payload(&mut buf, &encode_to_vec(vtb)?, OP_CHECKVTB)?;
    }

    buf.write_u8(OP_CHECKPOP)?;
    Ok(ScriptBuf::from_bytes(buf))
}

fn push_payload(buf: &mut Vec<u8>, payload: &[u8], classifier: u8) -> PopScriptResult<()> {
    if payload.len() > MAX_PUSHDATA2_LEN {
        return Err(PopScriptError::PayloadTooLarge(payload.len()));
    }

    buf.write_u8(OP_PUSHDATA2)?;
    buf.write_u16_le(payload.len() as u16)?;
    buf.write_buf(payload)?;
    buf.write_u8(classifier)?;
    Ok(())
}
