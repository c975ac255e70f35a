//! Keccak-256 hashing.

use sha3::{Digest, Keccak256};

/// Compute the 256-bit Keccak hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Keccak-256 rendered as 64 lowercase hex digits.
pub fn keccak256_hex(data: &[u8]) -> String {
    hex::encode(keccak256(data))
}
