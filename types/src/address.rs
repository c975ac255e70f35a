//! EVM recipient address type.
//!
//! An address is 20 raw bytes. Its text form is 40 hex digits with an optional
//! `0x`/`0X` prefix; letter case carries only the EIP-55 checksum and never
//! changes the addressed value. Checksum verification lives in `rbridge-crypto`,
//! which is the only place a mixed-case string should be turned into an
//! [`EvmAddress`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BridgeError;

/// Number of hex characters in an address payload (prefix excluded).
pub const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte EVM-compatible account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EvmAddress([u8; 20]);

impl EvmAddress {
    /// The canonical prefix used when rendering an address.
    pub const PREFIX: &'static str = "0x";

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex payload without prefix.
    pub fn to_lower_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Decode a payload that has already passed format and checksum checks.
    ///
    /// Accepts an optional `0x`/`0X` prefix. Only the format is checked here.
    pub fn from_hex_payload(input: &str) -> Result<Self, BridgeError> {
        let payload = strip_hex_prefix(input);
        if payload.len() != ADDRESS_HEX_LEN {
            return Err(BridgeError::InvalidAddress(input.to_string()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(payload, &mut bytes)
            .map_err(|_| BridgeError::InvalidAddress(input.to_string()))?;
        Ok(Self(bytes))
    }
}

/// Strip a single leading `0x` or `0X` marker, if present.
pub fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.to_lower_hex())
    }
}

impl From<EvmAddress> for String {
    fn from(address: EvmAddress) -> Self {
        address.to_string()
    }
}

impl TryFrom<String> for EvmAddress {
    type Error = BridgeError;

    /// Serialized addresses are single-case. Mixed-case input asserts a checksum
    /// that this crate cannot verify, so it is refused here.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let payload = strip_hex_prefix(&value);
        let has_lower = payload.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = payload.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            return Err(BridgeError::InvalidAddress(value));
        }
        Self::from_hex_payload(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_prefix_variants() {
        assert_eq!(strip_hex_prefix("0xabc"), "abc");
        assert_eq!(strip_hex_prefix("0Xabc"), "abc");
        assert_eq!(strip_hex_prefix("abc"), "abc");
        // Only one marker is removed.
        assert_eq!(strip_hex_prefix("0x0xabc"), "0xabc");
    }

    #[test]
    fn decode_lowercase_with_and_without_prefix() {
        let a = EvmAddress::from_hex_payload("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
            .unwrap();
        let b = EvmAddress::from_hex_payload("5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED")
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes()[0], 0x5a);
        assert_eq!(a.to_string(), "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(EvmAddress::from_hex_payload("0x1234").is_err());
        assert!(EvmAddress::from_hex_payload("").is_err());
    }

    #[test]
    fn non_hex_rejected() {
        let bad = "0xZZaeb6053f3e94c9b9a09f33669435e7ef1beaed";
        assert_eq!(
            EvmAddress::from_hex_payload(bad),
            Err(BridgeError::InvalidAddress(bad.to_string()))
        );
    }

    #[test]
    fn serde_uses_prefixed_lowercase_string() {
        let addr = EvmAddress::from_bytes([0xab; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(20)));
        let back: EvmAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn serde_refuses_mixed_case() {
        let json = "\"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed\"";
        assert!(serde_json::from_str::<EvmAddress>(json).is_err());
    }
}
