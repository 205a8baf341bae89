#![forbid(unsafe_code)]

/// One observed slide of the sheet panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideReport {
    /// Raw offset from the controller. Not clamped.
    pub offset: f32,
    /// Peek height in effect when the slide was observed.
    pub peek_height: u32,
    /// Visible height implied by `offset`, see [`current_height`].
    pub current_height: f32,
    /// Measured height of the panel.
    pub panel_height: u32,
}

impl SlideReport {
    pub fn new(offset: f32, peek_height: u32, panel_height: u32) -> Self {
        Self {
            offset,
            peek_height,
            current_height: current_height(peek_height, offset),
            panel_height,
        }
    }
}

/// `peek - peek * |offset|`. A NaN offset counts as zero.
///
/// Offsets beyond `[-1, 1]` give negative heights; they are reported as is.
pub fn current_height(peek_height: u32, offset: f32) -> f32 {
    let offset = if offset.is_nan() { 0.0 } else { offset.abs() };
    let peek = peek_height as f32;
    peek - peek * offset
}
