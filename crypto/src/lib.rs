//! Cryptographic primitives for the rBridge swap core.
//!
//! - **Keccak-256** (the pre-standard SHA-3 variant used by Ethereum)
//! - **EIP-55** mixed-case checksum validation and rendering of EVM addresses

pub mod address;
pub mod hash;

pub use address::{
    checksum_digest, has_valid_format, is_valid_address, parse_address, to_checksum_address,
    verify_checksum,
};
pub use hash::{keccak256, keccak256_hex};
