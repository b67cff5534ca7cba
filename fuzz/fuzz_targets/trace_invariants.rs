#![no_main]

use libfuzzer_sys::fuzz_target;
use sortviz_core::{verify_trace, Algorithm, Engine};

fuzz_target!(|data: &[u8]| {
    let input: Vec<i64> = data
        .chunks_exact(2)
        .take(64)
        .map(|c| i64::from(i16::from_le_bytes([c[0], c[1]])))
        .collect();
    let engine = Engine::default();
    for algorithm in Algorithm::ALL {
        match engine.run(algorithm, &input) {
            Ok(trace) => {
                if let Err(violation) = verify_trace(&input, &trace) {
                    panic!("{algorithm}: {violation}");
                }
            }
            Err(_) => assert!(algorithm.requires_non_negative() && input.iter().any(|v| *v < 0)),
        }
    }
});
