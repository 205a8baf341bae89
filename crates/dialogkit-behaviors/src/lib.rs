#![forbid(unsafe_code)]

//! Presentation behaviors for dialogs.
//!
//! A dialog is presented through a [`PresentationStrategy`]:
//!
//! - [`ModalBehavior`] centers the dialog in a window narrower than the
//!   screen.
//! - [`BottomSheetBehavior`] anchors it to the bottom of the window as a
//!   draggable panel that peeks at part of its height and dismisses the
//!   dialog when dragged away.
//!
//! [`DialogController`] drives a strategy through its show cycle against the
//! host capabilities defined in `dialogkit-core`.
//!
//! # Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for the configuration types.
//! - `policy-config`: load a [`BehaviorConfig`] from TOML.

pub mod bottom_sheet;
pub mod config;
pub mod controller;
pub mod error;
pub mod modal;
pub mod strategy;

pub use bottom_sheet::{
    BottomSheetBehavior, DEFAULT_PEEK_RATIO, PEEK_ANIMATION_DURATION, SlideListener, SlideReport,
    current_height, desired_peek_height, final_peek_height,
};
pub use config::{BehaviorConfig, DialogStyle, SheetConfig};
pub use controller::{DialogController, DialogLifecycle, DismissListener, DismissReason};
pub use error::{BehaviorError, Result};
pub use modal::ModalBehavior;
pub use strategy::{Presentation, PresentationKind, PresentationStrategy};
