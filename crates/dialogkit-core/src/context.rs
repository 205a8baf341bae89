#![forbid(unsafe_code)]

//! Per-dialog host services and resource dimensions.

use std::rc::Rc;

use crate::animation::Animator;
use crate::sheet::SheetController;
use crate::view::ViewRef;

/// Resource dimensions used to size a centered dialog, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Dimensions {
    /// Space kept free on the left and right of the dialog.
    pub horizontal_margin: u32,
    /// Space kept free above and below the dialog.
    pub vertical_margin: u32,
    /// Default upper bound for the dialog width.
    pub max_width: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            horizontal_margin: 32,
            vertical_margin: 24,
            max_width: 356,
        }
    }
}

impl Dimensions {
    pub fn horizontal_margin(mut self, value: u32) -> Self {
        self.horizontal_margin = value;
        self
    }

    pub fn vertical_margin(mut self, value: u32) -> Self {
        self.vertical_margin = value;
        self
    }

    pub fn max_width(mut self, value: u32) -> Self {
        self.max_width = value;
        self
    }
}

/// Services the host provides to a presentation behavior.
pub trait Context {
    /// Resource dimensions for dialog sizing.
    fn dimensions(&self) -> Dimensions;

    /// The animator used for property transitions.
    fn animator(&self) -> Rc<dyn Animator>;

    /// Attach (or fetch the already attached) drag controller of `panel`.
    fn attach_sheet_controller(&self, panel: &ViewRef) -> Rc<dyn SheetController>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions() {
        let dims = Dimensions::default();
        assert_eq!(dims.horizontal_margin, 32);
        assert_eq!(dims.vertical_margin, 24);
        assert_eq!(dims.max_width, 356);
    }

    #[test]
    fn builders_override_fields() {
        let dims = Dimensions::default().max_width(500).vertical_margin(0);
        assert_eq!(dims.max_width, 500);
        assert_eq!(dims.vertical_margin, 0);
        assert_eq!(dims.horizontal_margin, 32);
    }
}
