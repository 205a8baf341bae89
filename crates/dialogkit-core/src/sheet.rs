#![forbid(unsafe_code)]

//! Bottom sheet drag controller contract.
//!
//! The controller owns the drag state machine of a sheet panel: it tracks the
//! current [`DragState`], the peek height, and delivers slide and state
//! events to a single registered callback.

use std::fmt;

/// Drag state of a bottom sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    /// The user is dragging the sheet.
    Dragging,
    /// Animating toward a stable state after a drag release.
    Settling,
    /// Fully expanded.
    Expanded,
    /// At rest at the peek height.
    #[default]
    Collapsed,
    /// Moved off screen. Terminal for a presented dialog.
    Hidden,
    /// Stable state between collapsed and expanded.
    HalfExpanded,
}

impl DragState {
    /// Whether the sheet rests in this state without an ongoing gesture or
    /// animation.
    #[inline]
    pub const fn is_stable(self) -> bool {
        !matches!(self, Self::Dragging | Self::Settling)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dragging => "dragging",
            Self::Settling => "settling",
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
            Self::Hidden => "hidden",
            Self::HalfExpanded => "half_expanded",
        }
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event delivered by a [`SheetController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetEvent {
    /// Intermediate drag offset as a fraction of the peek height.
    ///
    /// `0.0` is at rest, negative values are below the peek height, positive
    /// values are toward expanded. Hosts do not guarantee the value is in
    /// `[-1.0, 1.0]` or even finite.
    Slide(f32),
    /// The controller entered a new state.
    StateChanged(DragState),
}

/// Callback receiving sheet events.
pub type SheetCallback = Box<dyn FnMut(SheetEvent)>;

/// Drag/peek controller attached to a sheet panel.
pub trait SheetController {
    /// Current drag state.
    fn state(&self) -> DragState;

    /// Request a state. The controller may settle there asynchronously and
    /// report the change through the callback.
    fn set_state(&self, state: DragState);

    /// Current peek height in pixels.
    fn peek_height(&self) -> u32;

    /// Set the peek height immediately.
    fn set_peek_height(&self, peek_height: u32);

    /// Whether the sheet may be dragged to [`DragState::Hidden`].
    fn set_hideable(&self, hideable: bool);

    /// Register the event callback, replacing any previous one.
    fn set_callback(&self, callback: SheetCallback);
}
