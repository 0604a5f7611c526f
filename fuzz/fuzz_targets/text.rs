#![no_main]

use libfuzzer_sys::fuzz_target;
use multistack::{LoadConfig, MultiStack};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let config = LoadConfig::strict().with_max_capacity(1 << 16);
    if let Ok(stacks) = MultiStack::<i64>::parse_text_with(input, &config) {
        let mut out = Vec::new();
        stacks.write_text(&mut out).unwrap();
        let reparsed = MultiStack::<i64>::parse_text(std::str::from_utf8(&out).unwrap()).unwrap();
        assert!(reparsed.content_eq(&stacks));
    }
});
