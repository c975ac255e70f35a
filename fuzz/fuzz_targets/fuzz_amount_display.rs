#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use rbridge_types::{DecimalSpec, DisplayMode, NativeAmount};

#[derive(Arbitrary, Debug)]
struct Input {
    amount_le: Vec<u8>,
    base_unit_exponent: u8,
    display_exponent: u8,
    fixed: bool,
}

// Rendering never panics, emits only digits and one separator, and never
// reinterprets to more than the original amount.
fuzz_target!(|input: Input| {
    let Ok(spec) = DecimalSpec::new(
        input.base_unit_exponent.into(),
        input.display_exponent.into(),
    ) else {
        return;
    };
    let amount = NativeAmount::new(BigUint::from_bytes_le(&input.amount_le));
    let mode = if input.fixed {
        DisplayMode::Fixed
    } else {
        DisplayMode::Trimmed
    };

    let shown = rbridge_converter::to_display_with(&amount, spec, mode);
    assert!(shown.bytes().all(|b| b.is_ascii_digit() || b == b'.'));
    assert!(shown.matches('.').count() <= 1);

    let back = rbridge_converter::from_display(&shown, spec).expect("rendered amount parses");
    assert!(back <= amount);
});
