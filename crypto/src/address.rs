//! EVM address validation with the EIP-55 mixed-case checksum.
//!
//! Validation runs in three stages:
//! 1. Format gate: optional `0x`/`0X`, then exactly 40 hex characters.
//! 2. Single-case shortcut: an all-lowercase or all-uppercase payload asserts
//!    no checksum and is accepted as soon as the format is correct.
//! 3. Checksum: for mixed-case payloads, the i-th nibble of
//!    `keccak256(lowercase(payload))` decides the case of the i-th letter
//!    (nibble > 7 means uppercase, otherwise lowercase). Digits carry no case.
//!
//! Every function here is total: malformed input yields `false` / `None` /
//! [`BridgeError::InvalidAddress`], never a panic.

use rbridge_types::address::{strip_hex_prefix, ADDRESS_HEX_LEN};
use rbridge_types::{BridgeError, EvmAddress};

use crate::hash::keccak256;

/// Returns `true` if `input` is a well-formed, checksum-correct EVM address.
pub fn is_valid_address(input: &str) -> bool {
    if !has_valid_format(input) {
        return false;
    }
    let payload = strip_hex_prefix(input);
    if is_single_case(payload) {
        return true;
    }
    checksum_matches(payload)
}

/// Format gate only: optional prefix followed by exactly 40 hex characters.
pub fn has_valid_format(input: &str) -> bool {
    let payload = strip_hex_prefix(input);
    payload.len() == ADDRESS_HEX_LEN && payload.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checksum stage only, regardless of case uniformity.
///
/// An all-lowercase payload fails here whenever the digest demands an
/// uppercase letter; use [`is_valid_address`] for the full acceptance rule.
pub fn verify_checksum(input: &str) -> bool {
    has_valid_format(input) && checksum_matches(strip_hex_prefix(input))
}

/// The 64-digit lowercase hex Keccak-256 digest that drives EIP-55 casing.
///
/// The prefix, if any, is stripped and the payload lowercased before hashing.
pub fn checksum_digest(input: &str) -> String {
    let lowered = strip_hex_prefix(input).to_ascii_lowercase();
    hex::encode(keccak256(lowered.as_bytes()))
}

/// Render a format-valid address in canonical `0x`-prefixed EIP-55 case.
///
/// Mixed-case input is accepted only if its checksum is correct.
pub fn to_checksum_address(input: &str) -> Option<String> {
    if !is_valid_address(input) {
        return None;
    }
    let lowered = strip_hex_prefix(input).to_ascii_lowercase();
    let digest = keccak256(lowered.as_bytes());

    let mut out = String::with_capacity(2 + ADDRESS_HEX_LEN);
    out.push_str(EvmAddress::PREFIX);
    for (i, c) in lowered.chars().enumerate() {
        if c.is_ascii_alphabetic() && nibble_at(&digest, i) > 7 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Validate and decode an address into its typed form.
pub fn parse_address(input: &str) -> Result<EvmAddress, BridgeError> {
    if !is_valid_address(input) {
        tracing::debug!(input, "rejected EVM address");
        return Err(BridgeError::InvalidAddress(input.to_string()));
    }
    EvmAddress::from_hex_payload(input)
}

/// No uppercase letters, or no lowercase letters. All-digit payloads are both.
fn is_single_case(payload: &str) -> bool {
    let has_lower = payload.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = payload.bytes().any(|b| b.is_ascii_uppercase());
    !(has_lower && has_upper)
}

fn checksum_matches(payload: &str) -> bool {
    let digest = keccak256(payload.to_ascii_lowercase().as_bytes());
    payload.bytes().enumerate().all(|(i, b)| {
        let wants_upper = nibble_at(&digest, i) > 7;
        match b {
            b'a'..=b'f' => !wants_upper,
            b'A'..=b'F' => wants_upper,
            _ => true,
        }
    })
}

/// The i-th hex digit of the digest: high nibble for even i, low for odd.
fn nibble_at(digest: &[u8; 32], i: usize) -> u8 {
    let byte = digest[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}
