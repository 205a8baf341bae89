#![forbid(unsafe_code)]

//! Host capability contracts for dialogkit.
//!
//! Presentation behaviors never talk to a concrete UI toolkit. Everything
//! they need from the host is expressed here as a small trait or a plain
//! value type:
//!
//! - [`Window`] for sizing attributes and the window-level background
//! - [`View`] / [`Inflater`] for the view tree a behavior builds and queries
//! - [`SheetController`] for the drag/peek state of a bottom sheet panel
//! - [`Animator`] for fire-and-forget numeric property animation
//! - [`Context`] bundling the per-dialog services and resource dimensions
//! - [`DialogHandle`] for the owning dialog (queried, never owned)
//!
//! # Threading
//!
//! All contracts are single-threaded. Handles are shared with `Rc` and no
//! trait here requires `Send`. Callbacks registered with the host run on the
//! same event loop that invoked the behavior.

pub mod animation;
pub mod color;
pub mod context;
pub mod dialog;
pub mod geometry;
pub mod sheet;
pub mod view;
pub mod window;

pub use animation::{Animator, FrameCallback, PropertyAnimation};
pub use color::PackedRgba;
pub use context::{Context, Dimensions};
pub use dialog::DialogHandle;
pub use geometry::{CornerRadii, Corners, Dimension, Size};
pub use sheet::{DragState, SheetCallback, SheetController, SheetEvent};
pub use view::{ClickListener, Inflater, LayoutKind, MeasureCallback, View, ViewId, ViewRef};
pub use window::{Background, SoftInputMode, Window, WindowAttributes};
