#![forbid(unsafe_code)]

//! Draggable bottom sheet behavior.
//!
//! The sheet panel is attached to a host [`SheetController`] that owns the
//! drag state machine. This module decides the peek height, reacts to the
//! panel being dragged to `Hidden`, and dismisses the dialog on an outside
//! tap.
//!
//! # Peek height
//!
//! The desired peek is known as soon as the window height is. It is refined
//! once the panel has been measured, see [`final_peek_height`], and the
//! controller animates from one to the other.
//!
//! # Teardown
//!
//! Controller, panel and root are held together and released together,
//! either by [`on_dismiss`](PresentationStrategy::on_dismiss) or when the
//! sheet reaches `Hidden`. Callbacks handed to the host only hold a weak
//! handle to that state and become no-ops once it is gone.

mod peek;
mod slide;

pub use peek::{
    DEFAULT_PEEK_RATIO, PEEK_ANIMATION_DURATION, desired_peek_height, final_peek_height,
};
pub use slide::{SlideReport, current_height};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use dialogkit_core::{
    Animator, Background, Context, CornerRadii, Corners, DialogHandle, Dimension, DragState,
    Inflater, LayoutKind, PackedRgba, PropertyAnimation, SheetCallback, SheetController,
    SheetEvent, SoftInputMode, ViewId, ViewRef, Window,
};

use crate::config::{SheetConfig, validate_peek_height, validate_peek_ratio};
use crate::error::{BehaviorError, Result};
use crate::strategy::{PresentationKind, PresentationStrategy};

/// Observer of slide reports, in addition to the debug log.
pub type SlideListener = Rc<dyn Fn(&SlideReport)>;

struct Presented {
    controller: Rc<dyn SheetController>,
    panel: ViewRef,
    root: ViewRef,
}

#[derive(Default)]
struct SheetState {
    /// Incremented by every `create_view`; stale host callbacks compare it.
    cycle: u64,
    presented: Option<Presented>,
    dialog: Option<Weak<dyn DialogHandle>>,
}

type SharedState = Rc<RefCell<SheetState>>;
type WeakState = Weak<RefCell<SheetState>>;

/// A dialog presented as a panel anchored to the bottom of the window.
pub struct BottomSheetBehavior {
    config: Cell<SheetConfig>,
    peek_animation: Duration,
    slide_listener: Option<SlideListener>,
    state: SharedState,
}

impl Default for BottomSheetBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BottomSheetBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BottomSheetBehavior")
            .field("config", &self.config.get())
            .field("peek_animation", &self.peek_animation)
            .field("slide_listener", &self.slide_listener.is_some())
            .field("presented", &self.is_presented())
            .finish()
    }
}

impl BottomSheetBehavior {
    /// A sheet peeking at [`DEFAULT_PEEK_RATIO`] of the window height.
    pub fn new() -> Self {
        Self {
            config: Cell::new(SheetConfig::default()),
            peek_animation: PEEK_ANIMATION_DURATION,
            slide_listener: None,
            state: Rc::new(RefCell::new(SheetState::default())),
        }
    }

    /// A sheet using a validated `config`.
    pub fn from_config(config: &SheetConfig) -> Result<Self> {
        config.validate()?;
        let sheet = Self::new();
        sheet.config.set(*config);
        Ok(sheet)
    }

    /// Set the minimum peek height in pixels.
    pub fn with_peek_height(self, px: u32) -> Result<Self> {
        self.set_peek_height(px)?;
        Ok(self)
    }

    /// Set the minimum peek height as a fraction of the window height.
    pub fn with_peek_ratio(self, ratio: f32) -> Result<Self> {
        self.set_peek_ratio(ratio)?;
        Ok(self)
    }

    /// Duration of the peek transition after measurement.
    ///
    /// `Duration::ZERO` applies the final peek height directly.
    pub fn with_peek_animation(mut self, duration: Duration) -> Self {
        self.peek_animation = duration;
        self
    }

    /// Also deliver every slide report to `listener`.
    pub fn with_slide_listener(mut self, listener: impl Fn(&SlideReport) + 'static) -> Self {
        self.slide_listener = Some(Rc::new(listener));
        self
    }

    /// Takes effect on the next `create_view`.
    pub fn set_peek_height(&self, px: u32) -> Result<()> {
        let px = validate_peek_height(px)?;
        self.config.set(self.config.get().peek_height(px));
        Ok(())
    }

    /// Takes effect on the next `create_view`.
    pub fn set_peek_ratio(&self, ratio: f32) -> Result<()> {
        let ratio = validate_peek_ratio(ratio)?;
        self.config.set(self.config.get().peek_ratio(ratio));
        Ok(())
    }

    pub fn config(&self) -> SheetConfig {
        self.config.get()
    }

    /// Whether a show cycle is live: controller, panel and root are held.
    pub fn is_presented(&self) -> bool {
        self.state.borrow().presented.is_some()
    }

    pub fn sheet_controller(&self) -> Option<Rc<dyn SheetController>> {
        self.state
            .borrow()
            .presented
            .as_ref()
            .map(|p| Rc::clone(&p.controller))
    }

    pub fn panel(&self) -> Option<ViewRef> {
        self.state
            .borrow()
            .presented
            .as_ref()
            .map(|p| Rc::clone(&p.panel))
    }

    pub fn root(&self) -> Option<ViewRef> {
        self.state
            .borrow()
            .presented
            .as_ref()
            .map(|p| Rc::clone(&p.root))
    }

    /// Whether the owning dialog is still referenced for dismissal.
    pub fn has_owner(&self) -> bool {
        self.state.borrow().dialog.is_some()
    }

    fn sheet_callback(&self, cycle: u64) -> SheetCallback {
        let state = Rc::downgrade(&self.state);
        let listener = self.slide_listener.clone();
        Box::new(move |event| match event {
            SheetEvent::Slide(offset) => on_slide(&state, cycle, listener.as_deref(), offset),
            SheetEvent::StateChanged(drag) => on_state_changed(&state, cycle, drag),
        })
    }
}

impl PresentationStrategy for BottomSheetBehavior {
    fn kind(&self) -> PresentationKind {
        PresentationKind::BottomSheet
    }

    fn create_view(
        &self,
        context: &dyn Context,
        window: &mut dyn Window,
        inflater: &dyn Inflater,
        dialog: &Rc<dyn DialogHandle>,
    ) -> Result<ViewRef> {
        let _span = tracing::debug_span!("create_view", strategy = "bottom_sheet").entered();

        if self.is_presented() {
            return Err(BehaviorError::AlreadyPresented);
        }

        let root = inflater.inflate(LayoutKind::BottomSheetBase);
        let panel = root
            .find(ViewId::BOTTOM_SHEET_PANEL)
            .ok_or(BehaviorError::MissingView(ViewId::BOTTOM_SHEET_PANEL))?;

        let window_height = match window.available_size() {
            Some(size) => size.height,
            None => {
                tracing::warn!("window size unavailable, peek height computed for zero height");
                0
            }
        };
        let desired = desired_peek_height(window_height, &self.config.get());

        let cycle = {
            let mut state = self.state.borrow_mut();
            state.cycle = state.cycle.wrapping_add(1);
            state.cycle
        };

        let controller = context.attach_sheet_controller(&panel);
        controller.set_hideable(true);
        controller.set_peek_height(desired);
        controller.set_callback(self.sheet_callback(cycle));

        {
            let mut state = self.state.borrow_mut();
            state.presented = Some(Presented {
                controller,
                panel: Rc::clone(&panel),
                root: Rc::clone(&root),
            });
            state.dialog = Some(Rc::downgrade(dialog));
        }
        tracing::debug!(window_height, desired, "sheet controller attached");

        let state = Rc::downgrade(&self.state);
        let animator = context.animator();
        let duration = self.peek_animation;
        panel.on_measured(Box::new(move |measured| {
            let target = final_peek_height(desired, measured, window_height);
            tracing::debug!(desired, measured, target, "panel measured");
            animate_peek_height(&state, cycle, animator.as_ref(), target, duration);
        }));

        Ok(root)
    }

    fn content_area(&self, root: &ViewRef) -> Result<ViewRef> {
        root.find(ViewId::DIALOG_LAYOUT)
            .ok_or(BehaviorError::MissingView(ViewId::DIALOG_LAYOUT))
    }

    fn apply_window_constraints(
        &self,
        _context: &dyn Context,
        window: &mut dyn Window,
        _content: &ViewRef,
        max_width: Option<u32>,
    ) {
        if max_width == Some(0) {
            tracing::trace!("window constraints postponed");
            return;
        }
        let attributes = window
            .attributes()
            .width(Dimension::MatchParent)
            .height(Dimension::MatchParent)
            .soft_input(SoftInputMode::AdjustResize);
        window.set_attributes(attributes);
    }

    fn apply_background(
        &self,
        _context: &dyn Context,
        window: &mut dyn Window,
        _content: &ViewRef,
        color: PackedRgba,
        corner_radius: f32,
    ) {
        window.set_background(None);

        let Some(panel) = self.panel() else {
            tracing::trace!("panel released, background not applied");
            return;
        };
        panel.set_background(Some(Background::with_radii(
            color,
            CornerRadii::only(Corners::TOP, corner_radius),
        )));
    }

    fn on_show(&self) {
        let Some(root) = self.root() else {
            tracing::trace!("shown without a presented sheet");
            return;
        };
        let state = Rc::downgrade(&self.state);
        root.set_on_click(Some(Rc::new(move || on_outside_click(&state))));
    }

    fn on_dismiss(&self) -> bool {
        let Some(controller) = self.sheet_controller() else {
            return false;
        };
        if controller.state() == DragState::Hidden {
            return false;
        }

        // Release first: setting `Hidden` may re-enter through the dialog.
        let released = self.state.borrow_mut().presented.take();
        if let Some(presented) = released {
            presented.root.set_on_click(None);
        }

        tracing::debug!("hiding sheet before dismissal");
        controller.set_state(DragState::Hidden);
        true
    }
}

/// The controller of show cycle `cycle`, if that cycle is still presented.
fn live_controller(state: &WeakState, cycle: u64) -> Option<Rc<dyn SheetController>> {
    let shared = state.upgrade()?;
    let state = shared.borrow();
    if state.cycle != cycle {
        return None;
    }
    state.presented.as_ref().map(|p| Rc::clone(&p.controller))
}

fn animate_peek_height(
    state: &WeakState,
    cycle: u64,
    animator: &dyn Animator,
    target: u32,
    duration: Duration,
) {
    let Some(controller) = live_controller(state, cycle) else {
        tracing::trace!("measured after teardown, peek left alone");
        return;
    };

    let start = controller.peek_height();
    if target == start {
        return;
    }
    if target == 0 {
        tracing::warn!(start, "peek height collapsed to zero, animation skipped");
        return;
    }
    if duration.is_zero() {
        controller.set_peek_height(target);
        return;
    }

    let state = state.clone();
    animator.animate(
        PropertyAnimation::new(start, target, duration),
        Box::new(move |value| {
            if let Some(controller) = live_controller(&state, cycle) {
                controller.set_peek_height(value);
            }
        }),
    );
}

fn on_slide(state: &WeakState, cycle: u64, listener: Option<&dyn Fn(&SlideReport)>, offset: f32) {
    let handles = {
        let Some(shared) = state.upgrade() else {
            return;
        };
        let state = shared.borrow();
        if state.cycle != cycle {
            return;
        }
        state
            .presented
            .as_ref()
            .map(|p| (Rc::clone(&p.controller), Rc::clone(&p.panel)))
    };
    let Some((controller, panel)) = handles else {
        return;
    };

    let report = SlideReport::new(offset, controller.peek_height(), panel.measured_height());
    tracing::debug!(
        offset = report.offset,
        peek_height = report.peek_height,
        current_height = report.current_height,
        panel_height = report.panel_height,
        "sheet slide"
    );
    if let Some(listener) = listener {
        listener(&report);
    }
}

fn on_state_changed(state: &WeakState, cycle: u64, drag: DragState) {
    if drag != DragState::Hidden {
        tracing::trace!(state = %drag, "drag state ignored");
        return;
    }

    let (dialog, released) = {
        let Some(shared) = state.upgrade() else {
            return;
        };
        let mut state = shared.borrow_mut();
        if state.cycle != cycle {
            return;
        }
        (state.dialog.take(), state.presented.take())
    };
    if let Some(presented) = released {
        presented.root.set_on_click(None);
    }

    match dialog.and_then(|dialog| dialog.upgrade()) {
        Some(dialog) => {
            tracing::debug!("sheet hidden, dismissing dialog");
            dialog.dismiss();
        }
        None => tracing::trace!("sheet hidden without a dialog to dismiss"),
    }
}

fn on_outside_click(state: &WeakState) {
    let dialog = {
        let Some(shared) = state.upgrade() else {
            return;
        };
        let state = shared.borrow();
        state.dialog.as_ref().and_then(Weak::upgrade)
    };
    let Some(dialog) = dialog else {
        return;
    };
    if dialog.cancel_on_touch_outside() {
        tracing::debug!("outside touch, dismissing dialog");
        dialog.dismiss();
    }
}
