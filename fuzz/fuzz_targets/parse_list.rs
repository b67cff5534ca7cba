#![no_main]

use libfuzzer_sys::fuzz_target;
use sortviz_core::input::parse_list;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Must never panic; accepted lists must round-trip through the formatter.
        if let Ok(values) = parse_list(text) {
            let joined = values
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            assert_eq!(parse_list(&joined).ok(), Some(values));
        }
    }
});
