#![forbid(unsafe_code)]

//! The presentation strategy contract and its closed set of variants.
//!
//! A dialog controller depends only on [`PresentationStrategy`]. The
//! variants shipped here are collected in [`Presentation`]; tests may plug in
//! their own implementation of the trait.
//!
//! # Call order per show cycle
//!
//! 1. [`create_view`](PresentationStrategy::create_view)
//! 2. [`content_area`](PresentationStrategy::content_area)
//! 3. [`apply_window_constraints`](PresentationStrategy::apply_window_constraints)
//!    (again later if it was postponed with `Some(0)`)
//! 4. [`apply_background`](PresentationStrategy::apply_background)
//! 5. [`on_show`](PresentationStrategy::on_show)
//! 6. [`on_dismiss`](PresentationStrategy::on_dismiss), possibly more than once
//!
//! All methods take `&self`: a dismissal can be requested from inside a host
//! callback while another behavior call is still on the stack.

use std::fmt;
use std::rc::Rc;

use dialogkit_core::{Context, DialogHandle, Inflater, PackedRgba, ViewRef, Window};

use crate::bottom_sheet::BottomSheetBehavior;
use crate::config::BehaviorConfig;
use crate::error::Result;
use crate::modal::ModalBehavior;

/// How a dialog's window and views are built, sized and dismissed.
pub trait PresentationStrategy {
    /// Which variant this is, for logging.
    fn kind(&self) -> PresentationKind;

    /// Build the root view for one show cycle.
    ///
    /// `dialog` is the owning dialog; implementations may keep a weak
    /// reference to it.
    fn create_view(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        inflater: &dyn Inflater,
        dialog: &Rc<dyn DialogHandle>,
    ) -> Result<ViewRef>;

    /// The view title, body and buttons go into. Pure lookup.
    fn content_area(&self, root: &ViewRef) -> Result<ViewRef>;

    /// Size the window.
    ///
    /// `Some(0)` means the width is not known yet: the window is left
    /// untouched and the caller retries after layout. `None` selects the
    /// strategy's default.
    fn apply_window_constraints(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        max_width: Option<u32>,
    );

    /// Paint the dialog background.
    fn apply_background(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        color: PackedRgba,
        corner_radius: f32,
    );

    /// The dialog became visible.
    fn on_show(&self);

    /// The dialog is being dismissed.
    ///
    /// Returns `true` if the strategy is handling teardown itself and the
    /// caller must skip its default dismiss path. Must be idempotent.
    fn on_dismiss(&self) -> bool;
}

/// A shared strategy, so the host can keep inspecting it while a dialog
/// drives it.
impl<S: PresentationStrategy + ?Sized> PresentationStrategy for Rc<S> {
    fn kind(&self) -> PresentationKind {
        (**self).kind()
    }

    fn create_view(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        inflater: &dyn Inflater,
        dialog: &Rc<dyn DialogHandle>,
    ) -> Result<ViewRef> {
        (**self).create_view(context, window, inflater, dialog)
    }

    fn content_area(&self, root: &ViewRef) -> Result<ViewRef> {
        (**self).content_area(root)
    }

    fn apply_window_constraints(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        max_width: Option<u32>,
    ) {
        (**self).apply_window_constraints(context, window, content, max_width);
    }

    fn apply_background(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        color: PackedRgba,
        corner_radius: f32,
    ) {
        (**self).apply_background(context, window, content, color, corner_radius);
    }

    fn on_show(&self) {
        (**self).on_show();
    }

    fn on_dismiss(&self) -> bool {
        (**self).on_dismiss()
    }
}

/// Data-only selector for a [`Presentation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PresentationKind {
    #[default]
    Modal,
    BottomSheet,
}

impl fmt::Display for PresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modal => f.write_str("modal"),
            Self::BottomSheet => f.write_str("bottom_sheet"),
        }
    }
}

/// The closed set of shipped presentation strategies.
#[derive(Debug)]
pub enum Presentation {
    Modal(ModalBehavior),
    BottomSheet(BottomSheetBehavior),
}

impl Presentation {
    /// Build the strategy selected by `config`.
    ///
    /// Sheet peek settings are validated even though only the bottom sheet
    /// reads them.
    pub fn from_config(config: &BehaviorConfig) -> Result<Self> {
        config.sheet.validate()?;
        Ok(match config.presentation {
            PresentationKind::Modal => Self::Modal(ModalBehavior),
            PresentationKind::BottomSheet => {
                Self::BottomSheet(BottomSheetBehavior::from_config(&config.sheet)?)
            }
        })
    }

    fn strategy(&self) -> &dyn PresentationStrategy {
        match self {
            Self::Modal(modal) => modal,
            Self::BottomSheet(sheet) => sheet,
        }
    }
}

impl From<ModalBehavior> for Presentation {
    fn from(value: ModalBehavior) -> Self {
        Self::Modal(value)
    }
}

impl From<BottomSheetBehavior> for Presentation {
    fn from(value: BottomSheetBehavior) -> Self {
        Self::BottomSheet(value)
    }
}

impl PresentationStrategy for Presentation {
    fn kind(&self) -> PresentationKind {
        self.strategy().kind()
    }

    fn create_view(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        inflater: &dyn Inflater,
        dialog: &Rc<dyn DialogHandle>,
    ) -> Result<ViewRef> {
        self.strategy()
            .create_view(context, window, inflater, dialog)
    }

    fn content_area(&self, root: &ViewRef) -> Result<ViewRef> {
        self.strategy().content_area(root)
    }

    fn apply_window_constraints(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        max_width: Option<u32>,
    ) {
        self.strategy()
            .apply_window_constraints(context, window, content, max_width);
    }

    fn apply_background(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        color: PackedRgba,
        corner_radius: f32,
    ) {
        self.strategy()
            .apply_background(context, window, content, color, corner_radius);
    }

    fn on_show(&self) {
        self.strategy().on_show();
    }

    fn on_dismiss(&self) -> bool {
        self.strategy().on_dismiss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetConfig;

    #[test]
    fn from_config_selects_variant() {
        let modal = Presentation::from_config(&BehaviorConfig::default()).unwrap();
        assert_eq!(modal.kind(), PresentationKind::Modal);

        let config = BehaviorConfig::default()
            .presentation(PresentationKind::BottomSheet)
            .sheet(SheetConfig::default().peek_ratio(0.3));
        let sheet = Presentation::from_config(&config).unwrap();
        assert_eq!(sheet.kind(), PresentationKind::BottomSheet);
    }

    #[test]
    fn from_config_rejects_invalid_peek_for_any_variant() {
        let config = BehaviorConfig::default().sheet(SheetConfig::default().peek_ratio(0.0));
        assert!(matches!(
            Presentation::from_config(&config),
            Err(crate::BehaviorError::InvalidPeekRatio(_))
        ));
    }

    #[test]
    fn kind_display() {
        assert_eq!(PresentationKind::BottomSheet.to_string(), "bottom_sheet");
    }
}
