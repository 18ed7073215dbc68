#![no_main]
use libfuzzer_sys::fuzz_target;

use belle_core::Color;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match Color::from_hex(text) {
        Some(color) => {
            for channel in [color.r, color.g, color.b, color.a] {
                assert!((0.0..=1.0).contains(&channel), "channel out of range: {}", channel);
            }
            assert!(text.parse::<Color>().is_ok());
        }
        None => assert!(text.parse::<Color>().is_err()),
    }
});
