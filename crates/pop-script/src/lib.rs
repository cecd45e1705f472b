//! Proof-of-proof payloads inside host-chain scripts.
//!
//! A script carries one ATV and any number of VTBs, each pushed with
//! `OP_PUSHDATA2` and tagged by the opcode that follows it:
//!
//! ```text
//! OP_PUSHDATA2 <len:u16le> <atv> OP_CHECKATV
//! OP_PUSHDATA2 <len:u16le> <vtb_0> OP_CHECKVTB
//! ...
//! OP_PUSHDATA2 <len:u16le> <vtb_n> OP_CHECKVTB
//! OP_CHECKPOP
//! ```
//!
//! [`extract_pop_data`] scans a script for these and [`build_pop_script`]
//! produces one.

mod errors;
pub use errors::{PopScriptError, PopScriptResult};

mod opcodes;
pub use opcodes::{MAX_PUSHDATA2_LEN, OP_CHECKATV, OP_CHECKPOP, OP_CHECKVTB, OP_PUSHDATA2};

mod config;
pub use config::{DEFAULT_MAX_VTBS, PopScriptConfig};

mod builder;
pub use builder::build_pop_script;

mod extract;
pub use extract::{PopData, extract_from_script, extract_pop_data};
