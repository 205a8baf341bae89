#![forbid(unsafe_code)]

//! Pixel geometry shared by windows and views.

use bitflags::bitflags;

/// A width/height pair in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Layout request for one window axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Size to the content.
    #[default]
    WrapContent,
    /// Fill the parent (the whole screen for a dialog window).
    MatchParent,
    /// A fixed pixel extent.
    Exact(u32),
}

bitflags! {
    /// Corner selection for [`CornerRadii::only`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        const TOP_LEFT = 0b0001;
        const TOP_RIGHT = 0b0010;
        const BOTTOM_RIGHT = 0b0100;
        const BOTTOM_LEFT = 0b1000;
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Per-corner rounding radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Square corners everywhere.
    pub const ZERO: Self = Self::uniform(0.0);

    /// The same radius on all four corners.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// `radius` on the selected corners, square elsewhere.
    pub fn only(corners: Corners, radius: f32) -> Self {
        let pick = |corner: Corners| {
            if corners.contains(corner) {
                radius
            } else {
                0.0
            }
        };
        Self {
            top_left: pick(Corners::TOP_LEFT),
            top_right: pick(Corners::TOP_RIGHT),
            bottom_right: pick(Corners::BOTTOM_RIGHT),
            bottom_left: pick(Corners::BOTTOM_LEFT),
        }
    }

    /// Whether every corner has the same radius.
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}
