use rbridge_converter::ConvertError;
use rbridge_types::{BridgeError, NativeAmount};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("no recipient address given")]
    MissingRecipient,

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("no amount given")]
    MissingAmount,

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("insufficient transferable balance: need {needed}, have {available}")]
    InsufficientBalance {
        needed: NativeAmount,
        available: NativeAmount,
    },

    #[error("invalid amount: {0}")]
    Amount(#[from] ConvertError),

    #[error("configuration error: {0}")]
    Config(String),
}
