#![no_main]
use libfuzzer_sys::fuzz_target;

// The parser must reject or accept any UTF-8 input without panicking;
// scratch-stack discipline is debug-asserted inside `parse`.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = jsontree::parse(text);
    }
});
