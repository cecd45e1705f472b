//! VeriBlock address handling.
//!
//! There are two kinds of address, both 30-character strings starting with
//! `V` and carrying a checksum over their first 25 characters:
//!
//! - standard addresses, derived from a public key and written to the wire
//!   as their Base58 decoding
//! - multisig addresses, derived from a list of standard addresses, ending in
//!   a literal `0` and written to the wire as their Base59 decoding
//!
//! On the wire an address is a one-byte ID followed by the single-byte length
//! prefixed decoded payload.

mod errors;
pub use errors::AddressError;

pub mod base59;

mod address;
pub use address::{
    ADDRESS_LEN, Address, AddressKind, MULTISIG_ADDRESS_ID, MULTISIG_ENDING, STANDARD_ADDRESS_ID,
    STARTING_CHAR, is_valid_multisig_address, is_valid_standard_address,
};

mod codec;
pub use codec::{read_address, write_address};
