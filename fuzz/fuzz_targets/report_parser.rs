#![no_main]

use benchsift::report::Report;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the report constructors
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = Report::functional_from_value(&value);
        let _ = Report::microbenchmark_from_value(&value);
    }
});
