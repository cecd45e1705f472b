use thiserror::Error;
use vbk_codec::CodecError;

/// Errors from extracting or building proof-of-proof scripts.
#[derive(Debug, Error)]
pub enum PopScriptError {
    /// A pushed payload was followed by something other than a classifier
    /// opcode.
    #[error("unrecognized opcode {opcode:#04x} after payload at offset {offset}")]
    UnrecognizedOpcode {
        /// The byte found where a classifier was expected.
        opcode: u8,
        /// Script offset of that byte.
        offset: usize,
    },

    /// A length field or payload runs past the end of the script.
    #[error("script truncated at offset {offset} (wanted {wanted}, have {remaining})")]
    TruncatedScript {
        /// Script offset the read started at.
        offset: usize,
        /// Bytes the read needed.
        wanted: usize,
        /// Bytes left in the script.
        remaining: usize,
    },

    /// The script carries no ATV.
    #[error("script has no ATV")]
    MissingAtv,

    /// The script carries more than one ATV.
    #[error("second ATV at offset {0}")]
    DuplicateAtv(usize),

    /// The script carries more VTBs than allowed.
    #[error("script has more than {0} VTBs")]
    TooManyVtbs(usize),

    /// Encoded record doesn't fit a two-byte push length.
    #[error("payload of {0} bytes is too large for OP_PUSHDATA2")]
    PayloadTooLarge(usize),

    /// A payload didn't decode as the record its classifier names.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),
}

/// Result of script extraction and building.
pub type PopScriptResult<T> = Result<T, PopScriptError>;
