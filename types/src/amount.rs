//! Native base-unit amounts.
//!
//! A [`NativeAmount`] is the source of truth for every transfer: an
//! arbitrary-precision, non-negative integer counted in the source chain's
//! smallest indivisible unit. Display strings are always derived from it,
//! never the reverse.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::BridgeError;

/// An amount in base units of the source chain.
///
/// Serialized as a decimal string so that values beyond `u64`/`u128` survive
/// JSON and TOML round trips.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NativeAmount(BigUint);

impl NativeAmount {
    pub fn new(raw: BigUint) -> Self {
        Self(raw)
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn raw(&self) -> &BigUint {
        &self.0
    }

    pub fn into_raw(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            None
        } else {
            Some(Self(&self.0 - &other.0))
        }
    }

    pub fn saturating_sub(&self, other: &Self) -> Self {
        self.checked_sub(other).unwrap_or_default()
    }
}

impl From<u64> for NativeAmount {
    fn from(raw: u64) -> Self {
        Self(BigUint::from(raw))
    }
}

impl From<u128> for NativeAmount {
    fn from(raw: u128) -> Self {
        Self(BigUint::from(raw))
    }
}

impl From<BigUint> for NativeAmount {
    fn from(raw: BigUint) -> Self {
        Self(raw)
    }
}

/// Parses a plain base-unit integer: ASCII digits only, no sign, no separators.
impl FromStr for NativeAmount {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BridgeError::InvalidAmount(s.to_string()));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| BridgeError::InvalidAmount(s.to_string()))
    }
}

impl TryFrom<String> for NativeAmount {
    type Error = BridgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NativeAmount> for String {
    fn from(amount: NativeAmount) -> Self {
        amount.0.to_str_radix(10)
    }
}

impl Add for NativeAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for NativeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
