#![no_main]
use libfuzzer_sys::fuzz_target;

use calcbrain::Brain;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut brain = Brain::<f64>::new();
        for entry in s.split_whitespace() {
            let res = match entry.parse::<f64>() {
                Ok(x) => brain.push_operand(x),
                Err(_) => brain.perform_operation(entry),
            };
            assert_eq!(res.map(f64::to_bits), brain.evaluate().map(f64::to_bits));
        }
        let _ = brain.format_log();
    }
});
