//! VeriBlock transaction effects and the bytes that get signed.
//!
//! The signed message is the [`SpendEffects`] record followed by a single
//! empty length prefixed field:
//!
//! ```text
//! tx type         u8
//! source address  ID byte + length prefixed payload
//! source amount   var-len int
//! output count    u8
//! outputs         (address, var-len int amount) * count
//! signature index var-len int
//! reserved        00
//! ```

mod errors;
pub use errors::{TxError, TxResult, ValidationError};

mod types;
pub use types::{MAX_OUTPUTS, Output, OutputList, SpendEffects, TxType};

mod validate;
pub use validate::{
    MAX_AMOUNT, MAX_SIGNATURE_INDEX, OutputInput, TransactionEffects, TxInput, check_amount,
    check_byte, check_signature_index,
};

mod serialize;
pub use serialize::serialize_transaction_effects;

mod sign;
pub use sign::{SignedTransaction, sign_transaction};
