//! Opcode bytes that frame proofs in a script.

/// Push with a two-byte little-endian length.
pub const OP_PUSHDATA2: u8 = 0x4d;

/// Marks the preceding payload as an ATV.
pub const OP_CHECKATV: u8 = 0xba;

/// Marks the preceding payload as a VTB.
pub const OP_CHECKVTB: u8 = 0xbb;

/// Ends the proof region.
pub const OP_CHECKPOP: u8 = 0xbc;

/// Largest payload an `OP_PUSHDATA2` can carry.
pub const MAX_PUSHDATA2_LEN: usize = u16::MAX as usize;
