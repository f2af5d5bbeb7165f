use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to party key material.
#[derive(Debug, Error)]
pub enum PartyError {
    /// The decoded key is not exactly 32 bytes.
    #[error("Invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The key string is not valid hex.
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 32-byte public key identifying a party on the network.
///
/// The key is opaque at this layer: signature cryptography lives in the
/// host platform, which verifies signatures before a transaction ever
/// reaches the contract. The contract only compares identities, so keys
/// are ordered and hashable to keep participant and signer sets
/// duplicate free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OwningKey(#[serde(with = "hex::serde")] [u8; 32]);

impl OwningKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, PartyError> {
        let bytes = hex::decode(s)?;
        let len = bytes.len();
        let key: [u8; 32] = bytes
            .try_into()
            .map_err(|_| PartyError::InvalidKeyLength(len))?;
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for OwningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for OwningKey {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A named party on the network, e.g. a fund receiving dividends.
///
/// Two parties are the same signer iff their owning keys are equal; the
/// name is display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub owning_key: OwningKey,
}

impl Party {
    pub fn new(name: &str, owning_key: OwningKey) -> Self {
        Self {
            name: name.to_string(),
            owning_key,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_hex_round_trip() {
        let key = OwningKey::new([0xab; 32]);
        let parsed = OwningKey::from_hex(&key.to_string()).unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn key_rejects_wrong_length() {
        let err = OwningKey::from_hex("abcd").unwrap_err();
        assert!(matches!(err, PartyError::InvalidKeyLength(2)));
    }

    #[test]
    fn key_rejects_invalid_hex() {
        let err = OwningKey::from_hex("zz").unwrap_err();
        assert!(matches!(err, PartyError::InvalidHex(_)));
    }

    #[test]
    fn parties_compare_by_full_identity() {
        let a = Party::new("FundA", OwningKey::new([1; 32]));
        let b = Party::new("FundA", OwningKey::new([2; 32]));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
