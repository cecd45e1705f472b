use thiserror::Error;

/// Errors from vbk-codec.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    /// If we tried to read past the end of the underlying buffer.
    #[error("stream underflow (wanted {wanted} bytes, {remaining} remaining)")]
    Underflow {
        /// Number of bytes the read needed.
        wanted: usize,
        /// Number of bytes left in the stream.
        remaining: usize,
    },

    /// A variable-length integer declared a length of zero or one above the
    /// sanity ceiling.
    #[error("malformed var-len integer (length byte {0})")]
    MalformedInteger(u8),

    /// A var-len buffer declared a size-of-size or a size we refuse to read.
    #[error("malformed var-len buffer (size {size}, max {max})")]
    MalformedLength {
        /// The declared size.
        size: usize,
        /// The largest size allowed at this position.
        max: usize,
    },

    /// If we read a container length that was longer than allowed.
    #[error("overflow container (len {len}, bound {bound})")]
    OverflowContainer {
        /// Declared number of entries.
        len: usize,
        /// Largest number of entries allowed.
        bound: usize,
    },

    /// Tried to write a field through a length prefix too narrow for it.
    #[error("field too long for its length prefix ({len} > {max})")]
    FieldTooLong {
        /// Length of the field.
        len: usize,
        /// Largest length the prefix can express.
        max: usize,
    },

    /// If there was extra data in a buffer than we didn't consume reading a
    /// message.
    #[error("extra unnecessary input leftover ({0} bytes)")]
    ExtraInput(usize),

    /// A tag byte did not match any known variant of a type.
    #[error("invalid variant {tag:#04x} for {ty}")]
    InvalidVariant {
        /// Name of the type being decoded.
        ty: &'static str,
        /// The tag we found.
        tag: u8,
    },

    /// A structurally well-formed field failed a semantic check.
    #[error("invalid {ty}: {reason}")]
    InvalidValue {
        /// Name of the type being decoded.
        ty: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

impl CodecError {
    pub(crate) fn underflow(wanted: usize, remaining: usize) -> Self {
        Self::Underflow { wanted, remaining }
    }

    /// Returns if this error came from running out of input.
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow { .. })
    }
}
