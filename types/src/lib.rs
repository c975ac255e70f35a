//! Shared domain types for the rBridge swap core.
//!
//! This crate defines the types passed between every other crate in the workspace:
//! EVM recipient addresses, native base-unit amounts, decimal specifications,
//! destination chain identifiers and the shared error type.

pub mod address;
pub mod amount;
pub mod chain;
pub mod decimals;
pub mod error;

pub use address::EvmAddress;
pub use amount::NativeAmount;
pub use chain::ChainId;
pub use decimals::{DecimalSpec, DisplayMode, MAX_EXPONENT};
pub use error::BridgeError;
