#![forbid(unsafe_code)]

use std::cell::{Cell, RefCell};

use dialogkit_core::{DragState, SheetCallback, SheetController, SheetEvent};

/// When a requested state takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettleMode {
    /// `set_state` applies the state and reports it before returning.
    #[default]
    Immediate,
    /// `set_state` moves to `Settling`; the target is applied and reported on
    /// [`FakeSheetController::settle`].
    Deferred,
}

/// A scriptable drag controller.
#[derive(Default)]
pub struct FakeSheetController {
    mode: Cell<SettleMode>,
    state: Cell<DragState>,
    pending: Cell<Option<DragState>>,
    peek_height: Cell<u32>,
    hideable: Cell<bool>,
    callback: RefCell<Option<SheetCallback>>,
    requested: RefCell<Vec<DragState>>,
    peek_writes: RefCell<Vec<u32>>,
}

impl std::fmt::Debug for FakeSheetController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeSheetController")
            .field("state", &self.state.get())
            .field("peek_height", &self.peek_height.get())
            .field("hideable", &self.hideable.get())
            .finish()
    }
}

impl FakeSheetController {
    pub fn new(mode: SettleMode) -> Self {
        let controller = Self::default();
        controller.mode.set(mode);
        controller
    }

    pub fn set_mode(&self, mode: SettleMode) {
        self.mode.set(mode);
    }

    pub fn is_hideable(&self) -> bool {
        self.hideable.get()
    }

    pub fn has_callback(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// No request is pending and the sheet rests in a stable state.
    pub fn is_settled(&self) -> bool {
        self.pending.get().is_none() && self.state.get().is_stable()
    }

    /// Every state passed to `set_state`, in order.
    pub fn requested_states(&self) -> Vec<DragState> {
        self.requested.borrow().clone()
    }

    /// Every value passed to `set_peek_height`, in order.
    pub fn peek_writes(&self) -> Vec<u32> {
        self.peek_writes.borrow().clone()
    }

    /// Apply a deferred state request. Returns the applied state, if any.
    pub fn settle(&self) -> Option<DragState> {
        let target = self.pending.take()?;
        self.enter(target);
        Some(target)
    }

    /// Report a slide offset to the callback.
    pub fn slide(&self, offset: f32) {
        self.emit(SheetEvent::Slide(offset));
    }

    /// Simulate a user drag released into `target`.
    ///
    /// Reports `Dragging`, a few slide offsets, `Settling`, then `target`.
    pub fn drag_to(&self, target: DragState) {
        self.enter(DragState::Dragging);
        let direction = if target == DragState::Expanded { 1.0 } else { -1.0 };
        for step in [0.25_f32, 0.5, 0.75] {
            self.slide(step * direction);
        }
        self.enter(DragState::Settling);
        self.enter(target);
    }

    /// Set the state and report it, bypassing the settle mode.
    pub fn enter(&self, state: DragState) {
        tracing::trace!(state = %state, stable = state.is_stable(), "fake sheet state");
        self.state.set(state);
        self.emit(SheetEvent::StateChanged(state));
    }

    fn emit(&self, event: SheetEvent) {
        // The callback may re-enter the controller; never hold the borrow.
        let taken = self.callback.borrow_mut().take();
        if let Some(mut callback) = taken {
            callback(event);
            let mut slot = self.callback.borrow_mut();
            if slot.is_none() {
                *slot = Some(callback);
            }
        }
    }
}

impl SheetController for FakeSheetController {
    fn state(&self) -> DragState {
        self.state.get()
    }

    fn set_state(&self, state: DragState) {
        self.requested.borrow_mut().push(state);
        match self.mode.get() {
            SettleMode::Immediate => self.enter(state),
            SettleMode::Deferred => {
                self.pending.set(Some(state));
                self.enter(DragState::Settling);
            }
        }
    }

    fn peek_height(&self) -> u32 {
        self.peek_height.get()
    }

    fn set_peek_height(&self, peek_height: u32) {
        self.peek_writes.borrow_mut().push(peek_height);
        self.peek_height.set(peek_height);
    }

    fn set_hideable(&self, hideable: bool) {
        self.hideable.set(hideable);
    }

    fn set_callback(&self, callback: SheetCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }
}
