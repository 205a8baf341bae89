#![forbid(unsafe_code)]

//! A dialog driving one presentation strategy through its show cycle.
//!
//! [`DialogController`] is the owning dialog behaviors refer back to through
//! [`DialogHandle`]. It is always held in an `Rc` so that a strategy can keep
//! a weak reference to it and request dismissal from a host callback.
//!
//! # Dismissal
//!
//! [`DialogController::dismiss`] first asks the strategy. If the strategy
//! takes over (a bottom sheet sliding away), the controller stays `Showing`
//! until the strategy calls back into `dismiss`, which may happen before the
//! first call has returned.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use dialogkit_core::{Context, DialogHandle, Inflater, ViewRef, Window};
use web_time::Instant;

use crate::config::{BehaviorConfig, DialogStyle};
use crate::error::{BehaviorError, Result};
use crate::strategy::{Presentation, PresentationKind, PresentationStrategy};

/// Where a dialog is in its show cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogLifecycle {
    #[default]
    Created,
    Showing,
    Dismissed,
}

/// Why a dialog went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// [`DialogController::dismiss`], including requests made by the
    /// presentation itself.
    Requested,
    /// [`DialogController::cancel`].
    Cancelled,
}

/// Called once per completed dismissal.
pub type DismissListener = Box<dyn FnMut(DismissReason)>;

/// The owning dialog of a [`PresentationStrategy`].
pub struct DialogController {
    strategy: Box<dyn PresentationStrategy>,
    style: DialogStyle,
    cancel_on_touch_outside: Cell<bool>,
    lifecycle: Cell<DialogLifecycle>,
    pending_reason: Cell<Option<DismissReason>>,
    last_reason: Cell<Option<DismissReason>>,
    shown_at: Cell<Option<Instant>>,
    content: RefCell<Option<ViewRef>>,
    on_dismissed: RefCell<Option<DismissListener>>,
}

impl fmt::Debug for DialogController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogController")
            .field("kind", &self.strategy.kind())
            .field("style", &self.style)
            .field("lifecycle", &self.lifecycle.get())
            .field("last_reason", &self.last_reason.get())
            .finish()
    }
}

impl DialogController {
    pub fn new(strategy: Box<dyn PresentationStrategy>, style: DialogStyle) -> Rc<Self> {
        Rc::new(Self {
            strategy,
            cancel_on_touch_outside: Cell::new(style.cancel_on_touch_outside),
            style,
            lifecycle: Cell::new(DialogLifecycle::Created),
            pending_reason: Cell::new(None),
            last_reason: Cell::new(None),
            shown_at: Cell::new(None),
            content: RefCell::new(None),
            on_dismissed: RefCell::new(None),
        })
    }

    /// A controller for the presentation and style selected by `config`.
    pub fn from_config(config: &BehaviorConfig) -> Result<Rc<Self>> {
        let presentation = Presentation::from_config(config)?;
        Ok(Self::new(Box::new(presentation), config.style))
    }

    /// Install the dismissal listener, replacing any previous one.
    pub fn set_on_dismissed(&self, listener: impl FnMut(DismissReason) + 'static) {
        *self.on_dismissed.borrow_mut() = Some(Box::new(listener));
    }

    pub fn set_cancel_on_touch_outside(&self, cancel: bool) {
        self.cancel_on_touch_outside.set(cancel);
    }

    pub fn kind(&self) -> PresentationKind {
        self.strategy.kind()
    }

    pub fn strategy(&self) -> &dyn PresentationStrategy {
        self.strategy.as_ref()
    }

    pub fn style(&self) -> DialogStyle {
        self.style
    }

    pub fn lifecycle(&self) -> DialogLifecycle {
        self.lifecycle.get()
    }

    pub fn is_showing(&self) -> bool {
        self.lifecycle.get() == DialogLifecycle::Showing
    }

    /// Reason of the most recent completed dismissal.
    pub fn dismiss_reason(&self) -> Option<DismissReason> {
        self.last_reason.get()
    }

    /// Content area of the current show cycle.
    pub fn content(&self) -> Option<ViewRef> {
        self.content.borrow().clone()
    }

    /// Build, size, paint and show the dialog. Returns the root view.
    ///
    /// A dismissed dialog may be shown again.
    pub fn show(
        self: &Rc<Self>,
        context: &dyn Context,
        window: &mut dyn Window,
        inflater: &dyn Inflater,
    ) -> Result<ViewRef> {
        let _span = tracing::debug_span!("show", kind = %self.strategy.kind()).entered();

        if self.is_showing() {
            return Err(BehaviorError::AlreadyPresented);
        }

        let handle: Rc<dyn DialogHandle> = Rc::clone(self) as Rc<dyn DialogHandle>;
        let root = self
            .strategy
            .create_view(context, window, inflater, &handle)?;
        let content = match self.strategy.content_area(&root) {
            Ok(content) => content,
            Err(err) => {
                // Undo create_view; we are not showing so no dismissal runs.
                self.strategy.on_dismiss();
                return Err(err);
            }
        };

        self.strategy
            .apply_window_constraints(context, window, &content, self.style.max_width);
        self.strategy.apply_background(
            context,
            window,
            &content,
            self.style.background,
            self.style.corner_radius,
        );

        *self.content.borrow_mut() = Some(content);
        self.pending_reason.set(None);
        self.lifecycle.set(DialogLifecycle::Showing);
        self.shown_at.set(Some(Instant::now()));
        self.strategy.on_show();

        tracing::debug!("dialog shown");
        Ok(root)
    }

    /// Re-apply window constraints, typically after a postponed width
    /// became known.
    pub fn relayout(&self, context: &dyn Context, window: &mut dyn Window, max_width: Option<u32>) {
        let Some(content) = self.content() else {
            tracing::trace!("relayout without content");
            return;
        };
        self.strategy
            .apply_window_constraints(context, window, &content, max_width);
    }

    /// Dismiss the dialog, unless the presentation takes over.
    pub fn dismiss(&self) {
        self.request_dismiss(DismissReason::Requested);
    }

    /// Dismiss as a cancellation.
    pub fn cancel(&self) {
        self.request_dismiss(DismissReason::Cancelled);
    }

    fn request_dismiss(&self, reason: DismissReason) {
        if !self.is_showing() {
            tracing::trace!(lifecycle = ?self.lifecycle.get(), "dismiss ignored");
            return;
        }
        if self.pending_reason.get().is_none() {
            self.pending_reason.set(Some(reason));
        }
        if self.strategy.on_dismiss() {
            tracing::debug!("dismissal handed to presentation");
            return;
        }
        self.finish_dismiss();
    }

    fn finish_dismiss(&self) {
        if self.lifecycle.replace(DialogLifecycle::Dismissed) != DialogLifecycle::Showing {
            return;
        }
        let reason = self
            .pending_reason
            .take()
            .unwrap_or(DismissReason::Requested);
        self.last_reason.set(Some(reason));
        self.content.borrow_mut().take();

        let visible_ms = self
            .shown_at
            .take()
            .map(|at| u64::try_from(at.elapsed().as_millis()).unwrap_or(u64::MAX));
        tracing::debug!(?reason, visible_ms, "dialog dismissed");

        // The listener may show the dialog again; never hold the borrow.
        let taken = self.on_dismissed.borrow_mut().take();
        if let Some(mut listener) = taken {
            listener(reason);
            let mut slot = self.on_dismissed.borrow_mut();
            if slot.is_none() {
                *slot = Some(listener);
            }
        }
    }
}

impl DialogHandle for DialogController {
    fn cancel_on_touch_outside(&self) -> bool {
        self.cancel_on_touch_outside.get()
    }

    fn dismiss(&self) {
        DialogController::dismiss(self);
    }
}
