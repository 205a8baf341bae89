#![forbid(unsafe_code)]

//! The owning dialog, as seen by a presentation behavior.

/// Handle to the dialog a behavior presents.
///
/// Behaviors hold this only as a `Weak` reference: the dialog owns the
/// behavior, never the other way around.
pub trait DialogHandle {
    /// Whether touching outside the dialog content should cancel it.
    fn cancel_on_touch_outside(&self) -> bool;

    /// Request that the dialog dismiss itself.
    ///
    /// Implementations must tolerate re-entrant calls made while a dismissal
    /// is already in progress.
    fn dismiss(&self);
}
