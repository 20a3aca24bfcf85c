#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let value = match tagged_json::from_slice(data) {
        Ok(value) => value,
        Err(err) => {
            // every failure carries a position inside the input
            assert!(err.line() >= 1 && err.column() >= 1, "{:?}", err);
            return;
        }
    };

    let out = value.stringify();
    let reparsed = tagged_json::from_str(&out)
        .unwrap_or_else(|e| panic!("reparse {:?} failed: {}", out, e));
    assert_eq!(reparsed, value, "{}", out);
    assert_eq!(reparsed.stringify(), out);
});
