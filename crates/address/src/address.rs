//! Address validation and derivation.

use std::fmt;
use std::str::FromStr;

use bitcoin::base58;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use vbk_crypto::{PublicKey, sha256};

use crate::base59::{self, BASE58_ALPHABET, base58_index};
use crate::errors::AddressError;

/// Length of every address string.
pub const ADDRESS_LEN: usize = 30;

/// Every address starts with this.
pub const STARTING_CHAR: char = 'V';

/// Multisig addresses end with this, which is outside the Base58 alphabet.
pub const MULTISIG_ENDING: char = '0';

/// Wire ID of a standard address.
pub const STANDARD_ADDRESS_ID: u8 = 0x01;

/// Wire ID of a multisig address.
pub const MULTISIG_ADDRESS_ID: u8 = 0x03;

/// The checksum covers everything before this offset.
const CHECKSUM_START: usize = 25;
const STANDARD_CHECKSUM_LEN: usize = 5;
const MULTISIG_CHECKSUM_LEN: usize = 4;

const STANDARD_HASH_LEN: usize = CHECKSUM_START - 1;
const MULTISIG_HASH_LEN: usize = CHECKSUM_START - 3;

const MIN_MULTISIG_SIGNERS: usize = 2;
const MAX_MULTISIG_SIGNERS: usize = BASE58_ALPHABET.len();

/// First `len` characters of the Base58 SHA-256 of `prefix`.
fn checksum(prefix: &str, len: usize) -> String {
    base58::encode(&sha256(prefix.as_bytes()))
        .chars()
        .take(len)
        .collect()
}

/// Callers must have checked that `s` is ASCII and full length.
fn checksum_matches(s: &str, len: usize) -> bool {
    checksum(&s[..CHECKSUM_START], len) == s[CHECKSUM_START..CHECKSUM_START + len]
}

fn all_base58(b: &[u8]) -> bool {
    b.iter().all(|c| base58_index(*c).is_some())
}

/// Checks a string is a well-formed standard address with a good checksum.
pub fn is_valid_standard_address(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == ADDRESS_LEN
        && b[0] == STARTING_CHAR as u8
        && all_base58(b)
        && base58::decode(s).is_ok()
        && checksum_matches(s, STANDARD_CHECKSUM_LEN)
}

/// Checks a string is a well-formed multisig address with a good checksum.
pub fn is_valid_multisig_address(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != ADDRESS_LEN
        || b[0] != STARTING_CHAR as u8
        || b[ADDRESS_LEN - 1] != MULTISIG_ENDING as u8
        || !all_base58(&b[..ADDRESS_LEN - 1])
    {
        return false;
    }

    let (Some(m), Some(n)) = (base58_index(b[1]), base58_index(b[2])) else {
        return false;
    };
    let (m, n) = (m + 1, n + 1);
    if !(MIN_MULTISIG_SIGNERS..=MAX_MULTISIG_SIGNERS).contains(&n) || m > n {
        return false;
    }

    base59::decode(s).is_ok() && checksum_matches(s, MULTISIG_CHECKSUM_LEN)
}

/// Which of the two address formats an address is in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AddressKind {
    /// Single key address, Base58 on the wire.
    Standard,

    /// m-of-n address, Base59 on the wire.
    Multisig,
}

impl AddressKind {
    /// Wire ID byte.
    pub fn id(&self) -> u8 {
        match self {
            Self::Standard => STANDARD_ADDRESS_ID,
            Self::Multisig => MULTISIG_ADDRESS_ID,
        }
    }

    /// Looks up a kind from its wire ID.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            STANDARD_ADDRESS_ID => Some(Self::Standard),
            MULTISIG_ADDRESS_ID => Some(Self::Multisig),
            _ => None,
        }
    }

    fn validate(&self, s: &str) -> bool {
        match self {
            Self::Standard => is_valid_standard_address(s),
            Self::Multisig => is_valid_multisig_address(s),
        }
    }
}

/// A validated address.
///
/// The string form is what's kept, the wire payload is derived from it on
/// demand.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Address {
    kind: AddressKind,
    repr: String,
}

impl Address {
    /// Parses an address, trying standard before multisig.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        [AddressKind::Standard, AddressKind::Multisig]
            .into_iter()
            .find(|kind| kind.validate(s))
            .map(|kind| Self {
                kind,
                repr: s.to_owned(),
            })
            .ok_or_else(|| AddressError::InvalidAddress(s.to_owned()))
    }

    /// Parses an address that has to be of a particular kind.
    pub fn parse_as(kind: AddressKind, s: &str) -> Result<Self, AddressError> {
        if !kind.validate(s) {
            return Err(AddressError::InvalidAddress(s.to_owned()));
        }

        Ok(Self {
            kind,
            repr: s.to_owned(),
        })
    }

    /// Derives the standard address of a public key.
    pub fn from_public_key(pk: &PublicKey) -> Self {
        let mut repr = String::with_capacity(ADDRESS_LEN);
        repr.push(STARTING_CHAR);
        repr.extend(
            base58::encode(&sha256(&pk.to_asn1()))
                .chars()
                .take(STANDARD_HASH_LEN),
        );
        let cs = checksum(&repr, STANDARD_CHECKSUM_LEN);
        repr.push_str(&cs);

        Self {
            kind: AddressKind::Standard,
            repr,
        }
    }

    /// Derives the `m`-of-`n` multisig address of `n` standard addresses.
    ///
    /// Signer order matters.
    pub fn multisig(m: usize, signers: &[Address]) -> Result<Self, AddressError> {
        let n = signers.len();
        if !(MIN_MULTISIG_SIGNERS..=MAX_MULTISIG_SIGNERS).contains(&n) {
            return Err(AddressError::InvalidMultisig(format!(
                "{n} signers, need {MIN_MULTISIG_SIGNERS} to {MAX_MULTISIG_SIGNERS}"
            )));
        }

        if m == 0 || m > n {
            return Err(AddressError::InvalidMultisig(format!(
                "threshold {m} of {n}"
            )));
        }

        if let Some(a) = signers.iter().find(|a| a.is_multisig()) {
            return Err(AddressError::InvalidMultisig(format!(
                "signer {a} is itself multisig"
            )));
        }

        let joined: String = signers.iter().map(Address::as_str).collect();

        let mut repr = String::with_capacity(ADDRESS_LEN);
        repr.push(STARTING_CHAR);
        repr.push(BASE58_ALPHABET[m - 1] as char);
        repr.push(BASE58_ALPHABET[n - 1] as char);
        repr.extend(
            base58::encode(&sha256(joined.as_bytes()))
                .chars()
                .take(MULTISIG_HASH_LEN),
        );
        let cs = checksum(&repr, MULTISIG_CHECKSUM_LEN);
        repr.push_str(&cs);
        repr.push(MULTISIG_ENDING);

        Ok(Self {
            kind: AddressKind::Multisig,
            repr,
        })
    }

    /// Rebuilds an address from its wire payload.
    pub fn from_payload(kind: AddressKind, payload: &[u8]) -> Result<Self, AddressError> {
        let repr = match kind {
            AddressKind::Standard => base58::encode(payload),
            AddressKind::Multisig => base59::encode(payload),
        };
        Self::parse_as(kind, &repr)
    }

    /// Decodes the string with the alphabet for its kind, giving the bytes
    /// that go on the wire.
    pub fn to_payload(&self) -> Result<Vec<u8>, AddressError> {
        match self.kind {
            AddressKind::Standard => base58::decode(&self.repr)
                .map_err(|_| AddressError::InvalidAddress(self.repr.clone())),
            AddressKind::Multisig => base59::decode(&self.repr),
        }
    }

    /// Gets the kind of address.
    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    /// Returns if this is a multisig address.
    pub fn is_multisig(&self) -> bool {
        self.kind == AddressKind::Multisig
    }

    /// Gets the `(m, n)` signing threshold of a multisig address.
    pub fn threshold(&self) -> Option<(usize, usize)> {
        if !self.is_multisig() {
            return None;
        }

        let b = self.repr.as_bytes();
        Some((base58_index(b[1])? + 1, base58_index(b[2])? + 1))
    }

    /// Gets the string form.
    pub fn as_str(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.repr)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use vbk_crypto::PrivateKey;

    use super::*;

    const ADDR_11: &str = "VE8enbvu74CEZdkmwK9dQu3h5Dq978";
    const ADDR_22: &str = "VDjdxeLqaLuZjv1LWSGCXgHoNFQ9aG";
    const MULTISIG_2_OF_2: &str = "V22D1wmA398yXS6xyATeDwLWwGg390";

    fn key_addr(b: u8) -> Address {
        let sk = PrivateKey::from_bytes(&[b; 32]).unwrap();
        Address::from_public_key(&sk.public_key())
    }

    #[test]
    fn test_from_public_key() {
        let a = key_addr(0x11);
        assert_eq!(a.as_str(), ADDR_11);
        assert_eq!(a.kind(), AddressKind::Standard);
        assert!(is_valid_standard_address(ADDR_11));
        assert!(!is_valid_multisig_address(ADDR_11));
        assert_eq!(key_addr(0x22).as_str(), ADDR_22);
    }

    #[test]
    fn test_checksum_corruption() {
        let mut bad = ADDR_11.to_owned();
        bad.replace_range(29..30, "9");
        assert!(!is_valid_standard_address(&bad));
        assert!(Address::parse(&bad).is_err());

        // Body change invalidates the checksum too.
        let mut bad = ADDR_11.to_owned();
        bad.replace_range(3..4, "f");
        assert!(!is_valid_standard_address(&bad));
    }

    #[test]
    fn test_shape_rejects() {
        assert!(!is_valid_standard_address(""));
        assert!(!is_valid_standard_address(&ADDR_11[..29]));
        assert!(!is_valid_standard_address(&format!("W{}", &ADDR_11[1..])));
        assert!(!is_valid_standard_address("VE8enbvu74CEZdkmwK9dQu3h5Dq97é"));
        assert!(!is_valid_multisig_address("VE8enbvu74CEZdkmwK9dQu3h5Dq9é"));
    }

    #[test]
    fn test_multisig() {
        let signers = [key_addr(0x11), key_addr(0x22)];
        let ms = Address::multisig(2, &signers).unwrap();
        assert_eq!(ms.as_str(), MULTISIG_2_OF_2);
        assert!(ms.is_multisig());
        assert_eq!(ms.threshold(), Some((2, 2)));
        assert!(is_valid_multisig_address(MULTISIG_2_OF_2));
        assert!(!is_valid_standard_address(MULTISIG_2_OF_2));
        assert_eq!(Address::parse(MULTISIG_2_OF_2).unwrap(), ms);

        // Swapping signers changes the address.
        let swapped = Address::multisig(2, &[key_addr(0x22), key_addr(0x11)]).unwrap();
        assert_ne!(swapped, ms);
        assert_eq!(key_addr(0x11).threshold(), None);
    }

    #[test]
    fn test_multisig_params() {
        let a = key_addr(0x11);
        assert!(Address::multisig(1, std::slice::from_ref(&a)).is_err());
        assert!(Address::multisig(0, &[a.clone(), a.clone()]).is_err());
        assert!(Address::multisig(3, &[a.clone(), a.clone()]).is_err());

        let ms = Address::multisig(1, &[a.clone(), a.clone()]).unwrap();
        assert!(matches!(
            Address::multisig(1, &[a, ms]),
            Err(AddressError::InvalidMultisig(_))
        ));
    }

    #[test]
    fn test_multisig_threshold_above_n() {
        // m = 3 ('3'), n = 2 ('2'), same hash and checksum shape.
        let mut bad = MULTISIG_2_OF_2.to_owned();
        bad.replace_range(1..2, "3");
        assert!(!is_valid_multisig_address(&bad));
    }

    #[test]
    fn test_payloads() {
        let a = Address::parse(ADDR_11).unwrap();
        let payload = a.to_payload().unwrap();
        assert_eq!(
            hex::encode(&payload),
            "67ffafbcf9e046345d211028f8d64a38c5c1ce70ee43"
        );
        assert_eq!(Address::from_payload(AddressKind::Standard, &payload).unwrap(), a);

        let ms = Address::parse(MULTISIG_2_OF_2).unwrap();
        let payload = ms.to_payload().unwrap();
        assert_eq!(
            hex::encode(&payload),
            "af9fc104324ab3aa491c430cefb8870b205f8d06b9a2"
        );
        assert_eq!(Address::from_payload(AddressKind::Multisig, &payload).unwrap(), ms);

        // Payload of one kind decoded as the other.
        assert!(Address::from_payload(AddressKind::Multisig, &a.to_payload().unwrap()).is_err());
    }

    #[test]
    fn test_json() {
        let a = Address::parse(ADDR_11).unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, format!("\"{ADDR_11}\""));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), a);
        assert!(serde_json::from_str::<Address>("\"V123\"").is_err());
    }
}
