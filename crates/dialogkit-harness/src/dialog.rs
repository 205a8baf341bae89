#![forbid(unsafe_code)]

use std::cell::Cell;
use std::rc::Rc;

use dialogkit_core::DialogHandle;

/// An owning dialog that only counts dismiss requests.
#[derive(Debug, Default)]
pub struct RecordingDialog {
    cancel_on_touch_outside: Cell<bool>,
    dismissals: Cell<usize>,
}

impl RecordingDialog {
    /// A dialog with cancel-on-touch-outside enabled.
    pub fn new() -> Rc<Self> {
        let dialog = Self::default();
        dialog.cancel_on_touch_outside.set(true);
        Rc::new(dialog)
    }

    pub fn set_cancel_on_touch_outside(&self, cancel: bool) {
        self.cancel_on_touch_outside.set(cancel);
    }

    /// Number of `dismiss` calls received.
    pub fn dismissals(&self) -> usize {
        self.dismissals.get()
    }

    /// This dialog as the trait-object handle behaviors take.
    pub fn handle(self: &Rc<Self>) -> Rc<dyn DialogHandle> {
        Rc::clone(self) as Rc<dyn DialogHandle>
    }
}

impl DialogHandle for RecordingDialog {
    fn cancel_on_touch_outside(&self) -> bool {
        self.cancel_on_touch_outside.get()
    }

    fn dismiss(&self) {
        self.dismissals.set(self.dismissals.get() + 1);
    }
}
