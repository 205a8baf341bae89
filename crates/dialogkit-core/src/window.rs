#![forbid(unsafe_code)]

//! Dialog window attributes and the window sizing service.

use crate::color::PackedRgba;
use crate::geometry::{CornerRadii, Dimension, Size};

/// How the window reacts when an input method appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoftInputMode {
    #[default]
    Unspecified,
    /// Shrink the window so focused input stays visible.
    AdjustResize,
    /// Pan the window content instead of resizing it.
    AdjustPan,
}

/// Layout attributes of a dialog window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowAttributes {
    pub width: Dimension,
    pub height: Dimension,
    pub soft_input: SoftInputMode,
}

impl WindowAttributes {
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    pub fn soft_input(mut self, mode: SoftInputMode) -> Self {
        self.soft_input = mode;
        self
    }
}

/// A filled rectangle with per-corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Background {
    pub fill: PackedRgba,
    pub radii: CornerRadii,
}

impl Background {
    /// A background rounded uniformly on all corners.
    pub const fn rounded(fill: PackedRgba, radius: f32) -> Self {
        Self {
            fill,
            radii: CornerRadii::uniform(radius),
        }
    }

    /// A background with explicit corner radii.
    pub const fn with_radii(fill: PackedRgba, radii: CornerRadii) -> Self {
        Self { fill, radii }
    }
}

/// The host window a dialog is presented in.
pub trait Window {
    /// Size available to the window, or `None` if the host cannot report it
    /// (e.g. the window is not attached to a display yet).
    fn available_size(&self) -> Option<Size>;

    /// Current layout attributes.
    fn attributes(&self) -> WindowAttributes;

    /// Replace the layout attributes.
    fn set_attributes(&mut self, attributes: WindowAttributes);

    /// Current window-level background.
    fn background(&self) -> Option<Background>;

    /// Replace the window-level background; `None` clears it.
    fn set_background(&mut self, background: Option<Background>);
}
