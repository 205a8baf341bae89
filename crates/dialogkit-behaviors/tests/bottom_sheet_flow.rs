#![forbid(unsafe_code)]

//! End-to-end bottom sheet presentation through a [`DialogController`].
//!
//! The owning dialog here is the real controller, so a sheet reaching
//! `Hidden` calls back into `dismiss` while the sheet may still be on the
//! stack.
//!
//! # Invariants
//!
//! 1. **Single dismissal**: however the sheet goes away (drag, outside tap,
//!    programmatic dismiss), the dismiss listener fires exactly once.
//! 2. **Release before signal**: by the time the dialog is dismissed, the
//!    sheet holds no controller, panel or root.
//! 3. **Peek refinement**: a panel shorter than the desired peek settles at
//!    its own height.
//!
//! Run: `cargo test -p dialogkit-behaviors --test bottom_sheet_flow`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dialogkit_behaviors::{
    BottomSheetBehavior, DialogController, DialogLifecycle, DialogStyle, DismissReason,
};
use dialogkit_core::{
    Background, CornerRadii, Corners, Dimension, DragState, PackedRgba, PropertyAnimation,
    SheetController, Size, ViewId, Window,
};
use dialogkit_harness::{FakeContext, FakeInflater, FakeWindow, SettleMode, init_test_tracing};

// =============================================================================
// Test Utilities
// =============================================================================

struct Host {
    ctx: FakeContext,
    window: FakeWindow,
    inflater: FakeInflater,
}

impl Host {
    fn new(ctx: FakeContext) -> Self {
        init_test_tracing();
        Self {
            ctx,
            window: FakeWindow::new(Size::new(1080, 1000)),
            inflater: FakeInflater::new(),
        }
    }
}

struct Shown {
    behavior: Rc<BottomSheetBehavior>,
    dialog: Rc<DialogController>,
    dismissed: Rc<Cell<usize>>,
}

fn show(host: &mut Host, behavior: BottomSheetBehavior, style: DialogStyle) -> Shown {
    let behavior = Rc::new(behavior);
    let dialog = DialogController::new(Box::new(Rc::clone(&behavior)), style);
    let dismissed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&dismissed);
    dialog.set_on_dismissed(move |_| counter.set(counter.get() + 1));
    dialog
        .show(&host.ctx, &mut host.window, &host.inflater)
        .unwrap();
    Shown {
        behavior,
        dialog,
        dismissed,
    }
}

fn assert_released(shown: &Shown) {
    assert!(!shown.behavior.is_presented());
    assert!(shown.behavior.sheet_controller().is_none());
    assert!(shown.behavior.panel().is_none());
    assert!(shown.behavior.root().is_none());
}

// =============================================================================
// Show
// =============================================================================

#[test]
fn show_sizes_window_and_paints_panel() {
    let mut host = Host::new(FakeContext::new());
    let color = PackedRgba::rgb(240, 240, 240);
    let shown = show(
        &mut host,
        BottomSheetBehavior::new(),
        DialogStyle::default().background(color).corner_radius(16.0),
    );

    assert!(shown.dialog.is_showing());
    let attrs = host.window.attributes();
    assert_eq!(attrs.width, Dimension::MatchParent);
    assert_eq!(attrs.height, Dimension::MatchParent);
    assert_eq!(host.window.background(), None);
    assert_eq!(
        host.inflater
            .view(ViewId::BOTTOM_SHEET_PANEL)
            .unwrap()
            .background(),
        Some(Background::with_radii(
            color,
            CornerRadii::only(Corners::TOP, 16.0)
        ))
    );
    assert_eq!(
        shown.dialog.content().map(|content| content.id()),
        Some(ViewId::DIALOG_LAYOUT)
    );
    assert!(
        host.inflater
            .view(ViewId::BOTTOM_SHEET_ROOT)
            .unwrap()
            .has_click_listener()
    );
}

#[test]
fn short_panel_settles_at_measured_height() {
    let mut host = Host::new(FakeContext::new());
    let _shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();
    assert_eq!(controller.peek_height(), 600);

    host.inflater
        .view(ViewId::BOTTOM_SHEET_PANEL)
        .unwrap()
        .layout(400);
    let animator = host.ctx.manual_animator();
    assert_eq!(
        animator.started(),
        vec![PropertyAnimation::new(
            600,
            400,
            Duration::from_millis(1000)
        )]
    );
    animator.step(0.25);
    assert_eq!(controller.peek_height(), 550);
    animator.finish_all();
    assert_eq!(controller.peek_height(), 400);
}

#[test]
fn ratio_sheet_keeps_desired_peek() {
    let mut host = Host::new(FakeContext::new());
    let behavior = BottomSheetBehavior::new().with_peek_ratio(0.3).unwrap();
    let _shown = show(&mut host, behavior, DialogStyle::default());
    host.inflater
        .view(ViewId::BOTTOM_SHEET_PANEL)
        .unwrap()
        .layout(500);

    assert_eq!(host.ctx.manual_animator().running(), 0);
    assert_eq!(host.ctx.sheet_controller().unwrap().peek_height(), 300);
}

// =============================================================================
// Dismissal
// =============================================================================

#[test]
fn programmatic_dismiss_hides_sheet_first() {
    let mut host = Host::new(FakeContext::new());
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();

    shown.dialog.dismiss();

    assert_eq!(controller.requested_states(), vec![DragState::Hidden]);
    assert_eq!(controller.state(), DragState::Hidden);
    assert_eq!(shown.dialog.lifecycle(), DialogLifecycle::Dismissed);
    assert_eq!(shown.dismissed.get(), 1);
    assert_released(&shown);
    assert!(!shown.behavior.has_owner());
}

#[test]
fn deferred_hide_dismisses_after_settling() {
    let mut host = Host::new(FakeContext::new().with_settle_mode(SettleMode::Deferred));
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();

    shown.dialog.dismiss();
    assert_eq!(shown.dialog.lifecycle(), DialogLifecycle::Showing);
    assert_released(&shown);

    assert_eq!(shown.dismissed.get(), 0);

    controller.settle();
    assert_eq!(shown.dialog.lifecycle(), DialogLifecycle::Dismissed);
    assert_eq!(shown.dismissed.get(), 1);
}

#[test]
fn second_dismiss_while_hiding_completes_immediately() {
    let mut host = Host::new(FakeContext::new().with_settle_mode(SettleMode::Deferred));
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();

    shown.dialog.dismiss();
    shown.dialog.dismiss();
    assert_eq!(controller.requested_states(), vec![DragState::Hidden]);
    assert_eq!(shown.dialog.lifecycle(), DialogLifecycle::Dismissed);
    assert_eq!(shown.dismissed.get(), 1);

    controller.settle();
    assert_eq!(shown.dismissed.get(), 1);
}

#[test]
fn cancel_reason_survives_sheet_callback() {
    let mut host = Host::new(FakeContext::new().with_settle_mode(SettleMode::Deferred));
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    shown.dialog.cancel();
    host.ctx.sheet_controller().unwrap().settle();
    assert_eq!(shown.dialog.dismiss_reason(), Some(DismissReason::Cancelled));
}

#[test]
fn dragging_away_dismisses_once() {
    let mut host = Host::new(FakeContext::new());
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();

    controller.drag_to(DragState::Hidden);
    assert_eq!(shown.dialog.lifecycle(), DialogLifecycle::Dismissed);
    assert_eq!(shown.dismissed.get(), 1);
    assert_released(&shown);
    assert!(controller.requested_states().is_empty());

    controller.enter(DragState::Hidden);
    shown.dialog.dismiss();
    assert_eq!(shown.dismissed.get(), 1);
}

#[test]
fn expanding_keeps_dialog_open() {
    let mut host = Host::new(FakeContext::new());
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();
    controller.drag_to(DragState::Expanded);
    controller.drag_to(DragState::Collapsed);
    assert!(shown.dialog.is_showing());
    assert!(shown.behavior.is_presented());
}

#[test]
fn outside_tap_follows_cancel_flag() {
    let mut host = Host::new(FakeContext::new());
    let shown = show(
        &mut host,
        BottomSheetBehavior::new(),
        DialogStyle::default().cancel_on_touch_outside(false),
    );
    let root = host.inflater.view(ViewId::BOTTOM_SHEET_ROOT).unwrap();

    assert!(root.click());
    assert!(shown.dialog.is_showing());

    shown.dialog.set_cancel_on_touch_outside(true);
    assert!(root.click());
    assert_eq!(shown.dialog.lifecycle(), DialogLifecycle::Dismissed);
    assert_eq!(shown.dismissed.get(), 1);
    assert!(!root.has_click_listener());
}

#[test]
fn pending_peek_animation_stops_at_teardown() {
    let mut host = Host::new(FakeContext::new());
    let shown = show(&mut host, BottomSheetBehavior::new(), DialogStyle::default());
    let controller = host.ctx.sheet_controller().unwrap();
    host.inflater
        .view(ViewId::BOTTOM_SHEET_PANEL)
        .unwrap()
        .layout(400);

    shown.dialog.dismiss();
    host.ctx.manual_animator().finish_all();
    assert_eq!(controller.peek_writes(), vec![600]);
}

#[test]
fn sheet_can_be_shown_again() {
    let mut host = Host::new(FakeContext::new());
    let behavior = Rc::new(BottomSheetBehavior::new());
    let dialog = DialogController::new(Box::new(Rc::clone(&behavior)), DialogStyle::default());

    for _ in 0..2 {
        dialog
            .show(&host.ctx, &mut host.window, &host.inflater)
            .unwrap();
        assert!(behavior.is_presented());
        host.ctx.sheet_controller().unwrap().drag_to(DragState::Hidden);
        assert_eq!(dialog.lifecycle(), DialogLifecycle::Dismissed);
        assert!(!behavior.is_presented());
    }
    assert_eq!(host.inflater.inflations(), 2);
}
