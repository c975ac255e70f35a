//! Conversion errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("not a plain decimal amount: {0:?}")]
    InvalidAmount(String),

    #[error("too many fractional digits: {found} given, at most {max} accepted")]
    TooManyFractionalDigits { found: usize, max: u32 },

    #[error("{0:?} cannot be expressed exactly in base units")]
    PrecisionLoss(String),
}
