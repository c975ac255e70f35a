//! Native base units to display strings.

use num_bigint::BigUint;
use rbridge_types::{DecimalSpec, DisplayMode, NativeAmount};

use crate::pow10;

/// Render `amount` for display under `spec`, trimming trailing zeros.
///
/// `toDisplay(0, _)` is `"0"`; a zero display exponent never emits `.`.
pub fn to_display(amount: &NativeAmount, spec: DecimalSpec) -> String {
    to_display_with(amount, spec, DisplayMode::Trimmed)
}

/// Render `amount` for display under `spec` with an explicit formatting mode.
///
/// The output only ever contains ASCII digits and at most one `.`: no sign,
/// exponent or grouping separators.
pub fn to_display_with(amount: &NativeAmount, spec: DecimalSpec, mode: DisplayMode) -> String {
    let scaled = scale_to_display(amount, spec);
    render_fixed_point(&scaled, spec.display_exponent(), mode)
}

/// The amount expressed as an integer count of display-precision units.
///
/// Divides (truncating) when base units are finer than the display precision,
/// multiplies when they are coarser.
pub fn scale_to_display(amount: &NativeAmount, spec: DecimalSpec) -> BigUint {
    let factor = pow10(spec.exponent_gap());
    if spec.is_coarsening() {
        amount.raw() / factor
    } else {
        amount.raw() * factor
    }
}

fn render_fixed_point(scaled: &BigUint, fraction_digits: u32, mode: DisplayMode) -> String {
    let digits = scaled.to_str_radix(10);
    let frac_len = fraction_digits as usize;
    if frac_len == 0 {
        return digits;
    }

    let (int_part, frac_part) = if digits.len() > frac_len {
        let (i, f) = digits.split_at(digits.len() - frac_len);
        (i.to_string(), f.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>frac_len$}"))
    };

    let frac_part = match mode {
        DisplayMode::Trimmed => frac_part.trim_end_matches('0'),
        DisplayMode::Fixed => frac_part.as_str(),
    };
    if frac_part.is_empty() {
        int_part
    } else {
        format!("{int_part}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(base: u32, display: u32) -> DecimalSpec {
        DecimalSpec::new(base, display).unwrap()
    }

    fn show(raw: u128, base: u32, display: u32) -> String {
        to_display(&NativeAmount::from(raw), spec(base, display))
    }

    fn show_fixed(raw: u128, base: u32, display: u32) -> String {
        to_display_with(&NativeAmount::from(raw), spec(base, display), DisplayMode::Fixed)
    }

    #[test]
    fn zero_is_bare_zero() {
        for (b, d) in [(12, 6), (6, 6), (0, 0), (2, 8), (18, 0)] {
            assert_eq!(show(0, b, d), "0");
        }
    }

    #[test]
    fn twelve_to_six_truncates_sub_display_digits() {
        assert_eq!(show(1_234_567_000_000, 12, 6), "1.234567");
        assert_eq!(show(1_234_560_000_000, 12, 6), "1.23456");
        assert_eq!(show(1_000_000_000_000, 12, 6), "1");
        // Digits below 10^-6 are dropped, never rounded up.
        assert_eq!(show(1_234_567_999_999, 12, 6), "1.234567");
        assert_eq!(show(1_234_567, 12, 6), "0.000001");
        assert_eq!(show(999_999, 12, 6), "0");
    }

    #[test]
    fn equal_exponents_only_insert_separator() {
        assert_eq!(show(1_234_567, 6, 6), "1.234567");
        assert_eq!(show(1_234_560, 6, 6), "1.23456");
        assert_eq!(show(1_000_000, 6, 6), "1");
    }

    #[test]
    fn trims_every_trailing_zero() {
        // A run of zeros straddling non-zero digits must all go, not all but one.
        assert_eq!(show(1_000_100, 6, 6), "1.0001");
        assert_eq!(show(1_100_000, 6, 6), "1.1");
        assert_eq!(show(10_000_000, 6, 6), "10");
        assert_eq!(show(100_000, 6, 6), "0.1");
    }

    #[test]
    fn left_pads_small_values() {
        assert_eq!(show(1, 6, 6), "0.000001");
        assert_eq!(show(120, 6, 6), "0.00012");
    }

    #[test]
    fn zero_display_exponent_never_emits_separator() {
        assert_eq!(show(1_999_999, 6, 0), "1");
        assert_eq!(show(42, 0, 0), "42");
        assert_eq!(show_fixed(42, 0, 0), "42");
    }

    #[test]
    fn finer_display_multiplies() {
        assert_eq!(show(123, 2, 8), "1.23");
        assert_eq!(show_fixed(123, 2, 8), "1.23000000");
        assert_eq!(show(5, 0, 3), "5");
    }

    #[test]
    fn fixed_mode_keeps_width() {
        assert_eq!(show_fixed(1_000_000_000_000, 12, 6), "1.000000");
        assert_eq!(show_fixed(0, 12, 6), "0.000000");
        assert_eq!(show_fixed(1_234_560, 6, 6), "1.234560");
    }

    #[test]
    fn beyond_machine_word_range() {
        let raw: NativeAmount = format!("7{}", "0".repeat(100)).parse().unwrap();
        let s = to_display(&raw, spec(90, 6));
        assert_eq!(s, format!("7{}", "0".repeat(10)));
        let s = to_display(&NativeAmount::from(u128::MAX), spec(0, 200));
        assert_eq!(s, u128::MAX.to_string());
    }

    #[test]
    fn scale_directions() {
        let a = NativeAmount::from(1_234_567u64);
        assert_eq!(scale_to_display(&a, spec(12, 6)), BigUint::from(1u32));
        assert_eq!(scale_to_display(&a, spec(6, 8)), BigUint::from(123_456_700u32));
    }
}
