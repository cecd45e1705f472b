//! Linear scan of a script for pushed proofs.

use bitcoin::Script;
use serde::{Deserialize, Serialize};
use tracing::*;
use vbk_codec::{Codec, Decoder, ReadStream, decode_buf_exact};
use vbk_proofs::{Atv, Vtb};

use crate::builder::build_pop_script;
use crate::config::PopScriptConfig;
use crate::errors::{PopScriptError, PopScriptResult};
use crate::opcodes::{OP_CHECKATV, OP_CHECKPOP, OP_CHECKVTB, OP_PUSHDATA2};

/// Proofs carried by one script, VTBs in the order they appear.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PopData {
    /// The single ATV.
    pub atv: Atv,

    /// Every VTB, possibly none.
    pub vtbs: Vec<Vtb>,
}

impl PopData {
    /// Constructs a new instance.
    pub fn new(atv: Atv, vtbs: Vec<Vtb>) -> Self {
        Self { atv, vtbs }
    }

    /// Builds the script carrying these proofs.
    pub fn to_script(&self) -> PopScriptResult<bitcoin::ScriptBuf> {
        build_pop_script(&self.atv, &self.vtbs)
    }
}

/// Extracts the proofs from a script's raw bytes.
///
/// Scans from the start.  Each `OP_PUSHDATA2 <len:u16le> <payload>` must be
/// followed by `OP_CHECKATV` or `OP_CHECKVTB`, which decides how the payload
/// is decoded, and the payload must be consumed exactly.  Any other byte is
/// skipped.  Scanning ends at `OP_CHECKPOP` (unless the config says
/// otherwise) or at the end of the script.
///
/// # Errors
///
/// Returns [`PopScriptError`] if a push runs off the end of the script, a
/// payload has no classifier, a payload fails to decode, or the script
/// doesn't hold exactly one ATV and at most `max_vtbs` VTBs.
pub fn extract_pop_data(script: &[u8], config: &PopScriptConfig) -> PopScriptResult<PopData> {
    let mut stream = ReadStream::new(script);
    let mut atv = None;
    let mut vtbs = Vec::new();

    while stream.remaining() > 0 {
        let offset = stream.position();
        match stream.read_u8()? {
            OP_PUSHDATA2 => {
                let payload = read_push(&mut stream)?;

                ensure_remaining(&stream, 1)?;
                let classifier_offset = stream.position();
                match stream.read_u8()? {
                    OP_CHECKATV => {
                        if atv.is_some() {
                            return Err(PopScriptError::DuplicateAtv(offset));
                        }
                        atv = Some(decode_payload::<Atv>(&payload, offset, "ATV")?);
                    }
                    OP_CHECKVTB => {
                        if vtbs.len() >= config.max_vtbs {
                            return Err(PopScriptError::TooManyVtbs(config.max_vtbs));
                        }
                        vtbs.push(decode_payload::<Vtb>(&payload, offset, "VTB")?);
                    }
                    opcode => {
                        return Err(PopScriptError::UnrecognizedOpcode {
                            opcode,
                            offset: classifier_offset,
                        });
                    }
                }
            }
            OP_CHECKPOP if config.stop_at_checkpop => {
                trace!(%offset, "reached OP_CHECKPOP");
                break;
            }
            opcode => trace!(%offset, %opcode, "skipping byte"),
        }
    }

    let atv = atv.ok_or(PopScriptError::MissingAtv)?;
    debug!(vtbs = %vtbs.len(), "extracted pop data");
    Ok(PopData::new(atv, vtbs))
}

/// Extracts the proofs from a script, see [`extract_pop_data`].
pub fn extract_from_script(
    script: &Script,
    config: &PopScriptConfig,
) -> PopScriptResult<PopData> {
    extract_pop_data(script.as_bytes(), config)
}

fn ensure_remaining(stream: &ReadStream<&[u8]>, wanted: usize) -> PopScriptResult<()> {
    if wanted > stream.remaining() {
        return Err(PopScriptError::TruncatedScript {
            offset: stream.position(),
            wanted,
            remaining: stream.remaining(),
        });
    }
    Ok(())
}

/// Reads the length and payload following an `OP_PUSHDATA2`.
fn read_push(stream: &mut ReadStream<&[u8]>) -> PopScriptResult<Vec<u8>> {
    ensure_remaining(stream, 2)?;
    let len = stream.read_u16_le()? as usize;
    ensure_remaining(stream, len)?;
    Ok(stream.read_bytes(len)?)
}

fn decode_payload<T: Codec>(payload: &[u8], offset: usize, kind: &str) -> PopScriptResult<T> {
    let rec = decode_buf_exact::<T>(payload)
        .inspect_err(|e| warn!(%e, %offset, %kind, "rejected payload"))?;
    debug!(%offset, len = %payload.len(), %kind, "found payload");
    Ok(rec)
}
