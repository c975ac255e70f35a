//! Display strings back to native base units.

use num_bigint::BigUint;
use num_traits::Zero;
use rbridge_types::{DecimalSpec, NativeAmount};

use crate::error::ConvertError;
use crate::pow10;

/// Parse a user-entered display amount into base units for submission.
///
/// Accepted shapes: `12`, `12.5`, `.5`, `12.`. Signs, exponents, whitespace
/// and grouping separators are rejected, as is any fractional digit beyond
/// `display_exponent`. When the display precision is finer than base units,
/// a value that does not land on a whole base unit is refused rather than
/// truncated.
pub fn from_display(input: &str, spec: DecimalSpec) -> Result<NativeAmount, ConvertError> {
    let (int_part, frac_part) = input.split_once('.').unwrap_or((input, ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        tracing::debug!(input, "rejected display amount");
        return Err(ConvertError::InvalidAmount(input.to_string()));
    }

    let max = spec.display_exponent();
    if frac_part.len() > max as usize {
        return Err(ConvertError::TooManyFractionalDigits {
            found: frac_part.len(),
            max,
        });
    }

    // Integer count of display-precision units.
    let mut scaled_digits = String::with_capacity(int_part.len() + max as usize);
    scaled_digits.push_str(int_part);
    scaled_digits.push_str(frac_part);
    scaled_digits.extend(std::iter::repeat('0').take(max as usize - frac_part.len()));
    let scaled = BigUint::parse_bytes(scaled_digits.as_bytes(), 10)
        .ok_or_else(|| ConvertError::InvalidAmount(input.to_string()))?;

    let factor = pow10(spec.exponent_gap());
    let native = if spec.is_coarsening() {
        scaled * factor
    } else {
        let remainder = &scaled % &factor;
        if !remainder.is_zero() {
            return Err(ConvertError::PrecisionLoss(input.to_string()));
        }
        scaled / factor
    };
    Ok(NativeAmount::new(native))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(base: u32, display: u32) -> DecimalSpec {
        DecimalSpec::new(base, display).unwrap()
    }

    fn parse(input: &str, base: u32, display: u32) -> Result<String, ConvertError> {
        from_display(input, spec(base, display)).map(|a| a.to_string())
    }

    #[test]
    fn whole_and_fractional() {
        assert_eq!(parse("1", 12, 6).unwrap(), "1000000000000");
        assert_eq!(parse("1.234567", 12, 6).unwrap(), "1234567000000");
        assert_eq!(parse("0.5", 12, 6).unwrap(), "500000000000");
        assert_eq!(parse(".5", 12, 6).unwrap(), "500000000000");
        assert_eq!(parse("7.", 12, 6).unwrap(), "7000000000000");
        assert_eq!(parse("0", 12, 6).unwrap(), "0");
        assert_eq!(parse("007.10", 12, 6).unwrap(), "7100000000000");
    }

    #[test]
    fn malformed_rejected() {
        for bad in ["", ".", "-1", "+1", "1e6", "1,000", " 1", "1 ", "1.2.3", "abc", "1_000"] {
            assert_eq!(
                parse(bad, 12, 6),
                Err(ConvertError::InvalidAmount(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn too_many_fraction_digits() {
        assert_eq!(
            parse("1.2345678", 12, 6),
            Err(ConvertError::TooManyFractionalDigits { found: 7, max: 6 })
        );
        assert_eq!(
            parse("1.5", 6, 0),
            Err(ConvertError::TooManyFractionalDigits { found: 1, max: 0 })
        );
        assert_eq!(parse("3.", 6, 0).unwrap(), "3000000");
    }

    #[test]
    fn finer_display_requires_exact_base_units() {
        assert_eq!(parse("1.23", 2, 8).unwrap(), "123");
        assert_eq!(
            parse("1.234", 2, 8),
            Err(ConvertError::PrecisionLoss("1.234".to_string()))
        );
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let input = format!("{}.5", "9".repeat(80));
        let native = parse(&input, 30, 6).unwrap();
        assert_eq!(native, format!("{}5{}", "9".repeat(80), "0".repeat(29)));
    }
}
