#![no_main]

use libfuzzer_sys::fuzz_target;
use multistack::{LoadConfig, MultiStack};

fuzz_target!(|data: &[u8]| {
    let config = LoadConfig::strict().with_max_capacity(1 << 16);
    if let Ok(mut stacks) = MultiStack::<u32>::from_bytes_with(data, &config) {
        // A validated snapshot must survive every operation without panicking
        for region in 0..stacks.region_count() {
            let _ = stacks.push(region, 0xDEAD_BEEF);
            let _ = stacks.pop(region);
        }
        let _ = stacks.find_min();
        let _ = stacks.to_string();
        assert_eq!(MultiStack::<u32>::from_bytes(&stacks.to_bytes()).ok(), Some(stacks));
    }
});
