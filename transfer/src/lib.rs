//! Bridge transfer composition.
//!
//! Turns raw user input (recipient string, amount) into a validated
//! [`TransferRequest`] for the bridge's native-transfer call, and renders a
//! [`TransferPreview`] of what will arrive on the destination chain once the
//! bridge fee is withdrawn. Submission and fee queries are the caller's job.

pub mod config;
pub mod error;
pub mod preview;
pub mod request;

pub use config::BridgeConfig;
pub use error::TransferError;
pub use preview::TransferPreview;
pub use request::{TransferBuilder, TransferRequest};
