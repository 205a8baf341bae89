#![forbid(unsafe_code)]

//! Peek height arithmetic.

use std::time::Duration;

use crate::config::SheetConfig;

/// Fraction of the window height a sheet peeks at without configuration.
pub const DEFAULT_PEEK_RATIO: f32 = 0.6;

/// Duration of the transition from the desired to the final peek height.
pub const PEEK_ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Peek height requested before the panel is measured.
///
/// Ratio first, then absolute pixels, then [`DEFAULT_PEEK_RATIO`].
pub fn desired_peek_height(window_height: u32, config: &SheetConfig) -> u32 {
    match (config.peek_ratio, config.peek_height) {
        (Some(ratio), _) => scale(window_height, ratio),
        (None, Some(px)) => px,
        (None, None) => scale(window_height, DEFAULT_PEEK_RATIO),
    }
}

/// Peek height once the panel's measured height is known.
///
/// A panel at least as tall as `desired` peeks at `desired`, capped to the
/// window. A shorter panel peeks at its own height, which is not capped: a
/// pixel peek taller than the window can settle above `window_height`.
pub fn final_peek_height(desired: u32, measured: u32, window_height: u32) -> u32 {
    if measured >= desired {
        desired.min(window_height)
    } else {
        measured.min(desired)
    }
}

fn scale(window_height: u32, ratio: f32) -> u32 {
    let scaled = (f64::from(window_height) * f64::from(ratio)).round();
    // Saturating float-to-int cast; ratios are validated to (0, 1] upstream.
    scaled as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_ratio_is_sixty_percent() {
        assert_eq!(desired_peek_height(1000, &SheetConfig::default()), 600);
        assert_eq!(desired_peek_height(1, &SheetConfig::default()), 1);
        assert_eq!(desired_peek_height(0, &SheetConfig::default()), 0);
    }

    #[test]
    fn ratio_wins_over_pixels() {
        let config = SheetConfig::default().peek_height(900).peek_ratio(0.3);
        assert_eq!(desired_peek_height(1000, &config), 300);
    }

    #[test]
    fn pixels_used_without_ratio() {
        let config = SheetConfig::default().peek_height(250);
        assert_eq!(desired_peek_height(1000, &config), 250);
    }

    #[test]
    fn short_panel_settles_at_its_height() {
        assert_eq!(final_peek_height(600, 400, 1000), 400);
    }

    #[test]
    fn tall_panel_keeps_desired() {
        assert_eq!(final_peek_height(300, 500, 1000), 300);
    }

    #[test]
    fn desired_beyond_window_is_clamped() {
        assert_eq!(final_peek_height(1500, 2000, 1000), 1000);
    }

    #[test]
    fn short_panel_is_not_capped_to_window() {
        assert_eq!(final_peek_height(1500, 1200, 1000), 1200);
    }

    proptest! {
        #[test]
        fn default_matches_rounded_ratio(h in 1u32..100_000) {
            let expected = (f64::from(h) * f64::from(DEFAULT_PEEK_RATIO)).round() as u32;
            prop_assert_eq!(desired_peek_height(h, &SheetConfig::default()), expected);
        }

        #[test]
        fn ratio_matches_rounded_product(h in 1u32..100_000, ratio in 0.001f32..=1.0, px in 1u32..5000) {
            let config = SheetConfig::default().peek_height(px).peek_ratio(ratio);
            let expected = (f64::from(h) * f64::from(ratio)).round() as u32;
            prop_assert_eq!(desired_peek_height(h, &config), expected);
        }

        #[test]
        fn final_is_bounded(desired in 0u32..100_000, measured in 1u32..100_000, h in 0u32..100_000) {
            let peek = final_peek_height(desired, measured, h);
            // Only the tall-panel branch is capped to the window.
            if measured >= desired {
                prop_assert!(peek <= h);
            }
            prop_assert!(peek <= desired.max(measured));
            prop_assert!(peek <= desired);
        }
    }
}
