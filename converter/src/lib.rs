//! Amount conversion between a native chain and a bridge destination.
//!
//! A native balance is an integer count of base units; the destination
//! displays and accepts a fixed number of fractional digits. This crate
//! converts between the two without floating point:
//!
//! - [`to_display`] / [`to_display_with`]: native base units to a canonical
//!   decimal string, truncating toward zero.
//! - [`from_display`]: a user-entered decimal string back to base units for
//!   submission, refusing anything it cannot represent exactly.
//!
//! All arithmetic is arbitrary precision (`num-bigint`), so exponents well
//! beyond the machine word range are handled without overflow.

pub mod display;
pub mod error;
pub mod parse;

pub use display::{scale_to_display, to_display, to_display_with};
pub use error::ConvertError;
pub use parse::from_display;

use num_bigint::BigUint;

/// `10^exp` as an arbitrary-precision integer.
pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}
