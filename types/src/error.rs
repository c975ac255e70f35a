//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the rBridge core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Structural and checksum failures are deliberately folded into one kind.
    #[error("invalid EVM address: {0}")]
    InvalidAddress(String),

    #[error("unrepresentable decimal spec: base unit exponent {base_unit_exponent}, display exponent {display_exponent}")]
    UnrepresentableSpec {
        base_unit_exponent: i64,
        display_exponent: i64,
    },

    #[error("invalid native amount: {0}")]
    InvalidAmount(String),
}
