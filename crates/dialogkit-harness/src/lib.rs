#![forbid(unsafe_code)]

//! Deterministic in-memory host for dialogkit behaviors.
//!
//! Every capability trait from `dialogkit-core` has a fake here that records
//! what a behavior did and lets a test decide *when* host events happen:
//!
//! - [`FakeWindow`]: records attribute and background writes.
//! - [`FakeView`] / [`FakeInflater`]: a tiny view tree whose measurement is
//!   delivered by [`FakeView::layout`], either before or after a behavior
//!   registers for it.
//! - [`FakeSheetController`]: a drag controller that settles state requests
//!   synchronously or on [`FakeSheetController::settle`].
//! - [`ManualAnimator`]: queues animations until the test steps or finishes
//!   them.
//! - [`FakeContext`]: wires the above together.
//! - [`RecordingDialog`]: an owning dialog that counts dismiss requests.
//!
//! # Example
//!
//! ```ignore
//! let ctx = FakeContext::new();
//! let mut window = FakeWindow::new(Size::new(1080, 1000));
//! let inflater = FakeInflater::new();
//! let dialog = RecordingDialog::new();
//!
//! let sheet = BottomSheetBehavior::new();
//! let root = sheet.create_view(&ctx, &mut window, &inflater, &dialog.handle())?;
//! inflater.view(ViewId::BOTTOM_SHEET_PANEL).unwrap().layout(400);
//! ctx.manual_animator().finish_all();
//! ```

mod animator;
mod context;
mod dialog;
mod sheet;
mod view;
mod window;

pub use animator::ManualAnimator;
pub use context::FakeContext;
pub use dialog::RecordingDialog;
pub use sheet::{FakeSheetController, SettleMode};
pub use view::{FakeInflater, FakeView};
pub use window::FakeWindow;

use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_TEST_FILTER: &str = "dialogkit_behaviors=debug,dialogkit_harness=debug";

/// Install a test-friendly `tracing` subscriber.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_TEST_FILTER`]. Output goes
/// through the libtest writer so it is captured per test. Calling this more
/// than once is harmless.
pub fn init_test_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
