#![forbid(unsafe_code)]

//! Centered modal window behavior.
//!
//! Stateless: the window is sized from the screen and the context's
//! [`Dimensions`](dialogkit_core::Dimensions), and dismissal always follows
//! the caller's default path.

use std::rc::Rc;

use dialogkit_core::{
    Background, Context, DialogHandle, Dimension, Inflater, LayoutKind, PackedRgba,
    SoftInputMode, ViewRef, Window,
};

use crate::error::Result;
use crate::strategy::{PresentationKind, PresentationStrategy};

/// A dialog centered in a window narrower than the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalBehavior;

impl ModalBehavior {
    /// Window width for a screen `screen_width` wide.
    ///
    /// `min(max_width, screen_width - 2 * horizontal_margin)`, saturating.
    pub fn window_width(screen_width: u32, horizontal_margin: u32, max_width: u32) -> u32 {
        let calculated = screen_width.saturating_sub(horizontal_margin.saturating_mul(2));
        max_width.min(calculated)
    }

    /// Content max height for a screen `screen_height` tall.
    pub fn content_max_height(screen_height: u32, vertical_margin: u32) -> u32 {
        screen_height.saturating_sub(vertical_margin.saturating_mul(2))
    }
}

impl PresentationStrategy for ModalBehavior {
    fn kind(&self) -> PresentationKind {
        PresentationKind::Modal
    }

    fn create_view(
        &self,
        _context: &dyn Context,
        _window: &mut dyn Window,
        inflater: &dyn Inflater,
        _dialog: &Rc<dyn DialogHandle>,
    ) -> Result<ViewRef> {
        Ok(inflater.inflate(LayoutKind::ModalBase))
    }

    fn content_area(&self, root: &ViewRef) -> Result<ViewRef> {
        Ok(Rc::clone(root))
    }

    fn apply_window_constraints(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        content: &ViewRef,
        max_width: Option<u32>,
    ) {
        if max_width == Some(0) {
            tracing::trace!("window constraints postponed");
            return;
        }

        let attributes = window.attributes().soft_input(SoftInputMode::AdjustResize);
        let Some(screen) = window.available_size() else {
            window.set_attributes(attributes);
            tracing::debug!("window size unavailable, width left unchanged");
            return;
        };

        let dims = context.dimensions();
        content.set_max_height(Self::content_max_height(screen.height, dims.vertical_margin));

        let width = Self::window_width(
            screen.width,
            dims.horizontal_margin,
            max_width.unwrap_or(dims.max_width),
        );
        window.set_attributes(attributes.width(Dimension::Exact(width)));

        tracing::debug!(
            screen_width = screen.width,
            screen_height = screen.height,
            width,
            "applied window constraints"
        );
    }

    fn apply_background(
        &self,
        _context: &dyn Context,
        window: &mut dyn Window,
        _content: &ViewRef,
        color: PackedRgba,
        corner_radius: f32,
    ) {
        window.set_background(Some(Background::rounded(color, corner_radius)));
    }

    fn on_show(&self) {}

    fn on_dismiss(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogkit_core::{Dimensions, Size, ViewId};
    use dialogkit_harness::{FakeContext, FakeInflater, FakeWindow, RecordingDialog};

    struct Fixture {
        ctx: FakeContext,
        window: FakeWindow,
        inflater: FakeInflater,
        content: ViewRef,
    }

    fn fixture(screen: Size) -> Fixture {
        let ctx = FakeContext::new();
        let mut window = FakeWindow::new(screen);
        let inflater = FakeInflater::new();
        let dialog = RecordingDialog::new().handle();
        let root = ModalBehavior
            .create_view(&ctx, &mut window, &inflater, &dialog)
            .unwrap();
        let content = ModalBehavior.content_area(&root).unwrap();
        Fixture {
            ctx,
            window,
            inflater,
            content,
        }
    }

    #[test]
    fn width_is_capped_by_default_max() {
        let mut f = fixture(Size::new(1080, 1920));
        ModalBehavior.apply_window_constraints(&f.ctx, &mut f.window, &f.content, None);
        let attrs = f.window.attributes();
        assert_eq!(attrs.width, Dimension::Exact(356));
        assert_eq!(attrs.soft_input, SoftInputMode::AdjustResize);
        assert_eq!(attrs.height, Dimension::WrapContent);
    }

    #[test]
    fn width_is_capped_by_screen_margins() {
        let mut f = fixture(Size::new(1080, 1920));
        ModalBehavior.apply_window_constraints(&f.ctx, &mut f.window, &f.content, Some(2000));
        assert_eq!(f.window.attributes().width, Dimension::Exact(1016));
    }

    #[test]
    fn content_max_height_leaves_vertical_margins() {
        let mut f = fixture(Size::new(1080, 1920));
        ModalBehavior.apply_window_constraints(&f.ctx, &mut f.window, &f.content, None);
        let content = f.inflater.view(ViewId::DIALOG_LAYOUT).unwrap();
        assert_eq!(content.max_height(), Some(1920 - 48));
    }

    #[test]
    fn zero_max_width_postpones() {
        let mut f = fixture(Size::new(1080, 1920));
        let before = f.window.attributes();
        ModalBehavior.apply_window_constraints(&f.ctx, &mut f.window, &f.content, Some(0));
        assert_eq!(f.window.attributes(), before);
        assert_eq!(f.window.attribute_writes(), 0);
        assert_eq!(
            f.inflater.view(ViewId::DIALOG_LAYOUT).unwrap().max_height(),
            None
        );
    }

    #[test]
    fn missing_window_size_only_sets_soft_input() {
        let f = fixture(Size::new(1, 1));
        let mut window = FakeWindow::detached();
        ModalBehavior.apply_window_constraints(&f.ctx, &mut window, &f.content, None);
        assert_eq!(window.attribute_writes(), 1);
        assert_eq!(window.attributes().soft_input, SoftInputMode::AdjustResize);
        assert_eq!(window.attributes().width, Dimension::WrapContent);
        assert_eq!(
            f.inflater.view(ViewId::DIALOG_LAYOUT).unwrap().max_height(),
            None
        );
    }

    #[test]
    fn tiny_screen_saturates_to_zero() {
        assert_eq!(ModalBehavior::window_width(40, 32, 356), 0);
        assert_eq!(ModalBehavior::content_max_height(30, 24), 0);
    }

    #[test]
    fn custom_dimensions_are_used() {
        let ctx = FakeContext::new().with_dimensions(
            Dimensions::default()
                .horizontal_margin(0)
                .max_width(10_000),
        );
        let mut window = FakeWindow::new(Size::new(800, 600));
        let inflater = FakeInflater::new();
        let dialog = RecordingDialog::new().handle();
        let root = ModalBehavior
            .create_view(&ctx, &mut window, &inflater, &dialog)
            .unwrap();
        ModalBehavior.apply_window_constraints(&ctx, &mut window, &root, None);
        assert_eq!(window.attributes().width, Dimension::Exact(800));
    }

    #[test]
    fn background_is_uniformly_rounded_on_window() {
        let mut f = fixture(Size::new(1080, 1920));
        let color = PackedRgba::rgb(30, 30, 30);
        ModalBehavior.apply_background(&f.ctx, &mut f.window, &f.content, color, 12.0);
        assert_eq!(
            f.window.background(),
            Some(Background::rounded(color, 12.0))
        );
    }

    #[test]
    fn content_area_is_root() {
        let f = fixture(Size::new(100, 100));
        assert_eq!(f.content.id(), ViewId::DIALOG_LAYOUT);
    }

    #[test]
    fn dismiss_never_handled() {
        ModalBehavior.on_show();
        assert!(!ModalBehavior.on_dismiss());
        assert!(!ModalBehavior.on_dismiss());
    }
}
