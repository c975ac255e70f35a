#![no_main]

use libfuzzer_sys::fuzz_target;

// Address validation must be total: arbitrary bytes never panic, and anything
// accepted must render to a checksum form that is itself accepted.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let valid = rbridge_crypto::is_valid_address(input);
    let _ = rbridge_crypto::verify_checksum(input);
    let _ = rbridge_crypto::checksum_digest(input);

    if valid {
        let rendered = rbridge_crypto::to_checksum_address(input)
            .expect("valid address renders");
        assert!(rbridge_crypto::is_valid_address(&rendered));
        assert_eq!(
            rbridge_crypto::parse_address(&rendered).unwrap(),
            rbridge_crypto::parse_address(input).unwrap()
        );
    } else {
        assert!(rbridge_crypto::parse_address(input).is_err());
    }
});
