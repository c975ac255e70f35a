//! Decimal specifications for re-denominating amounts between chains.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Largest exponent accepted in a [`DecimalSpec`].
///
/// Real chains use 0..=18 (some go to 24). The cap keeps a typo in
/// configuration from asking for `10^4_000_000_000`.
pub const MAX_EXPONENT: u32 = 255;

/// How many base units make a whole token on the source chain, and how many
/// fractional digits the destination chain displays and accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDecimalSpec", into = "RawDecimalSpec")]
pub struct DecimalSpec {
    base_unit_exponent: u32,
    display_exponent: u32,
}

impl DecimalSpec {
    pub fn new(base_unit_exponent: u32, display_exponent: u32) -> Result<Self, BridgeError> {
        if base_unit_exponent > MAX_EXPONENT || display_exponent > MAX_EXPONENT {
            return Err(BridgeError::UnrepresentableSpec {
                base_unit_exponent: base_unit_exponent.into(),
                display_exponent: display_exponent.into(),
            });
        }
        Ok(Self {
            base_unit_exponent,
            display_exponent,
        })
    }

    pub fn base_unit_exponent(&self) -> u32 {
        self.base_unit_exponent
    }

    pub fn display_exponent(&self) -> u32 {
        self.display_exponent
    }

    /// Whether display precision is coarser than base units, i.e. converting
    /// to display divides rather than multiplies.
    pub fn is_coarsening(&self) -> bool {
        self.base_unit_exponent >= self.display_exponent
    }

    /// Absolute difference between the two exponents.
    pub fn exponent_gap(&self) -> u32 {
        self.base_unit_exponent.abs_diff(self.display_exponent)
    }
}

/// Native chain with 12 base-unit decimals bridged to a 6-decimal display.
impl Default for DecimalSpec {
    fn default() -> Self {
        Self {
            base_unit_exponent: 12,
            display_exponent: 6,
        }
    }
}

/// Wire/config form. Signed so negative exponents surface as
/// [`BridgeError::UnrepresentableSpec`] instead of a generic parse error.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawDecimalSpec {
    base_unit_exponent: i64,
    display_exponent: i64,
}

impl TryFrom<RawDecimalSpec> for DecimalSpec {
    type Error = BridgeError;

    fn try_from(raw: RawDecimalSpec) -> Result<Self, Self::Error> {
        let unrepresentable = || BridgeError::UnrepresentableSpec {
            base_unit_exponent: raw.base_unit_exponent,
            display_exponent: raw.display_exponent,
        };
        let base = u32::try_from(raw.base_unit_exponent).map_err(|_| unrepresentable())?;
        let display = u32::try_from(raw.display_exponent).map_err(|_| unrepresentable())?;
        DecimalSpec::new(base, display)
    }
}

impl From<DecimalSpec> for RawDecimalSpec {
    fn from(spec: DecimalSpec) -> Self {
        Self {
            base_unit_exponent: spec.base_unit_exponent.into(),
            display_exponent: spec.display_exponent.into(),
        }
    }
}

/// Formatting mode for display amounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Trailing fractional zeros and a lone separator are removed (amount previews).
    #[default]
    Trimmed,
    /// Exactly `display_exponent` fractional digits are always shown.
    Fixed,
}
