#![no_main]

use arbitrary::Arbitrary;
use dialogkit_behaviors::{SheetConfig, current_height, desired_peek_height, final_peek_height};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    window_height: u32,
    measured: u32,
    peek_height: Option<u32>,
    peek_ratio: Option<f32>,
    offsets: Vec<f32>,
}

fuzz_target!(|input: Input| {
    let config = SheetConfig {
        peek_height: input.peek_height,
        peek_ratio: input.peek_ratio,
    };
    if config.validate().is_err() {
        return;
    }

    let desired = desired_peek_height(input.window_height, &config);
    if config.peek_ratio.is_some() || config.peek_height.is_none() {
        assert!(desired <= input.window_height);
    }

    let settled = final_peek_height(desired, input.measured, input.window_height);
    assert!(settled <= desired);
    if input.measured >= desired {
        assert!(settled <= input.window_height);
    }

    for offset in input.offsets {
        let height = current_height(settled, offset);
        if offset.is_finite() && offset.abs() <= 1.0 {
            assert!(height >= 0.0 && height <= settled as f32);
        }
    }
});
