#![forbid(unsafe_code)]

//! Property animation service.

use std::time::Duration;

/// Callback invoked with each interpolated value, ending with `to`.
pub type FrameCallback = Box<dyn FnMut(u32)>;

/// A numeric property transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAnimation {
    pub from: u32,
    pub to: u32,
    pub duration: Duration,
}

impl PropertyAnimation {
    pub const fn new(from: u32, to: u32, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Linearly interpolated value at `progress` in `[0.0, 1.0]`.
    ///
    /// Out-of-range progress is clamped; NaN yields `from`.
    pub fn value_at(&self, progress: f32) -> u32 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        (from + (to - from) * f64::from(t)).round() as u32
    }
}

/// Asynchronous animator for numeric properties.
///
/// Fire-and-forget: the host drives `on_frame` from its event loop until the
/// animation completes. There is no cancellation handle; callers guard their
/// frame callbacks instead.
pub trait Animator {
    fn animate(&self, animation: PropertyAnimation, on_frame: FrameCallback);
}
