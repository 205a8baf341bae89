#![forbid(unsafe_code)]

//! View handles, layout inflation, and measurement callbacks.
//!
//! Views are shared handles (`Rc<dyn View>`): the host owns the tree and a
//! behavior only keeps references for as long as a dialog is presented.
//! Mutating methods take `&self`; hosts use interior mutability the same way
//! a retained-mode toolkit does.
//!
//! # Measurement
//!
//! [`View::on_measured`] is a one-shot registration. The host invokes the
//! callback exactly once, with the first non-zero measured height. If the
//! view is already measured, the host may call it before `on_measured`
//! returns; callers must tolerate both orders.

use std::fmt;
use std::rc::Rc;

use crate::window::Background;

/// Shared handle to a host view.
pub type ViewRef = Rc<dyn View>;

/// One-shot callback receiving a measured height in pixels.
pub type MeasureCallback = Box<dyn FnOnce(u32)>;

/// Click listener attached to a view.
pub type ClickListener = Rc<dyn Fn()>;

/// Identifier of a view inside an inflated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u32);

impl ViewId {
    /// The dialog layout that holds title, body and buttons.
    pub const DIALOG_LAYOUT: Self = Self(1);
    /// The draggable bottom sheet panel.
    pub const BOTTOM_SHEET_PANEL: Self = Self(2);
    /// Root of the bottom sheet layout (the touch-outside area).
    pub const BOTTOM_SHEET_ROOT: Self = Self(3);

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DIALOG_LAYOUT => f.write_str("dialog_layout"),
            Self::BOTTOM_SHEET_PANEL => f.write_str("bottom_sheet_panel"),
            Self::BOTTOM_SHEET_ROOT => f.write_str("bottom_sheet_root"),
            Self(id) => write!(f, "view#{id}"),
        }
    }
}

/// Layout templates a behavior can ask the host to inflate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// A dialog layout used directly as the window content.
    ///
    /// The root is the [`ViewId::DIALOG_LAYOUT`] view.
    ModalBase,
    /// A full-screen container holding a draggable panel.
    ///
    /// The root is [`ViewId::BOTTOM_SHEET_ROOT`]; it contains the
    /// [`ViewId::BOTTOM_SHEET_PANEL`] which contains the
    /// [`ViewId::DIALOG_LAYOUT`].
    BottomSheetBase,
}

/// A host view.
pub trait View {
    /// This view's identifier.
    fn id(&self) -> ViewId;

    /// Find `id` in this view's subtree, including the view itself.
    fn find(&self, id: ViewId) -> Option<ViewRef>;

    /// Last measured height in pixels (0 if not laid out yet).
    fn measured_height(&self) -> u32;

    /// Register a one-shot callback for the first non-zero measured height.
    fn on_measured(&self, callback: MeasureCallback);

    /// Cap the height this view may measure to.
    fn set_max_height(&self, max_height: u32);

    /// Replace the view's own background; `None` clears it.
    fn set_background(&self, background: Option<Background>);

    /// Attach or clear a click listener.
    fn set_on_click(&self, listener: Option<ClickListener>);
}

/// Builds view trees from layout templates.
pub trait Inflater {
    /// Inflate `layout`, returning its root view.
    fn inflate(&self, layout: LayoutKind) -> ViewRef;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_ids_display() {
        assert_eq!(ViewId::DIALOG_LAYOUT.to_string(), "dialog_layout");
        assert_eq!(ViewId::BOTTOM_SHEET_PANEL.to_string(), "bottom_sheet_panel");
        assert_eq!(ViewId(42).to_string(), "view#42");
    }

    #[test]
    fn well_known_ids_are_distinct() {
        let ids = [
            ViewId::DIALOG_LAYOUT,
            ViewId::BOTTOM_SHEET_PANEL,
            ViewId::BOTTOM_SHEET_ROOT,
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
