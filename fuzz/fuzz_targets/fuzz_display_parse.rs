#![no_main]

use libfuzzer_sys::fuzz_target;

use rbridge_types::DecimalSpec;

// Parsing user-typed amounts must never panic, whatever the spec.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let Ok(spec) = DecimalSpec::new(data[0].into(), data[1].into()) else {
        return;
    };
    let Ok(text) = std::str::from_utf8(&data[2..]) else {
        return;
    };

    if let Ok(native) = rbridge_converter::from_display(text, spec) {
        let _ = rbridge_converter::to_display(&native, spec);
    }
});
