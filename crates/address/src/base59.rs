//! Base59, the Base58 alphabet with `0` in front.
//!
//! Multisig addresses end in a `0`, which Base58 can't express, so they're
//! decoded with this instead.

use crate::errors::AddressError;

/// The Base58 alphabet.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The Base59 alphabet.
pub const BASE59_ALPHABET: &[u8; 59] =
    b"0123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 59;

/// Position of a character in the Base58 alphabet.
pub fn base58_index(c: u8) -> Option<usize> {
    BASE58_ALPHABET.iter().position(|a| *a == c)
}

fn base59_index(c: u8) -> Option<u32> {
    BASE59_ALPHABET
        .iter()
        .position(|a| *a == c)
        .map(|i| i as u32)
}

/// Encodes bytes as Base59, with each leading zero byte becoming a `0`.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|b| **b == 0).count();

    // Little-endian base-59 digits.
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 2);
    for &byte in &input[zeros..] {
        let mut carry = u32::from(byte);
        for d in digits.iter_mut() {
            carry += u32::from(*d) << 8;
            *d = (carry % BASE) as u8;
            carry /= BASE;
        }
        while carry > 0 {
            digits.push((carry % BASE) as u8);
            carry /= BASE;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat_n(BASE59_ALPHABET[0] as char, zeros));
    out.extend(
        digits
            .iter()
            .rev()
            .map(|d| BASE59_ALPHABET[*d as usize] as char),
    );
    out
}

/// Decodes a Base59 string.
pub fn decode(s: &str) -> Result<Vec<u8>, AddressError> {
    let zeros = s.bytes().take_while(|c| *c == BASE59_ALPHABET[0]).count();

    // Little-endian bytes.
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len());
    for c in s.chars().skip(zeros) {
        let mut carry = u8::try_from(c)
            .ok()
            .and_then(base59_index)
            .ok_or(AddressError::InvalidCharacter(c))?;
        for b in bytes.iter_mut() {
            carry += u32::from(*b) * BASE;
            *b = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}
