#![no_main]

use arbitrary::Arbitrary;
use dialogkit_behaviors::{BottomSheetBehavior, DialogController, DialogStyle};
use dialogkit_core::{DragState, Size, ViewId};
use dialogkit_harness::{FakeContext, FakeInflater, FakeWindow, SettleMode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum State {
    Expanded,
    Collapsed,
    Hidden,
    HalfExpanded,
}

impl From<State> for DragState {
    fn from(value: State) -> Self {
        match value {
            State::Expanded => DragState::Expanded,
            State::Collapsed => DragState::Collapsed,
            State::Hidden => DragState::Hidden,
            State::HalfExpanded => DragState::HalfExpanded,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Step {
    Layout(u32),
    Frame(f32),
    FinishAnimations,
    Slide(f32),
    Drag(State),
    Settle,
    Dismiss,
    OutsideTap,
    Show,
}

#[derive(Debug, Arbitrary)]
struct Input {
    window_height: u16,
    deferred: bool,
    cancel_on_touch_outside: bool,
    steps: Vec<Step>,
}

fuzz_target!(|input: Input| {
    let mode = if input.deferred {
        SettleMode::Deferred
    } else {
        SettleMode::Immediate
    };
    let ctx = FakeContext::new().with_settle_mode(mode);
    let mut window = FakeWindow::new(Size::new(1080, u32::from(input.window_height)));
    let inflater = FakeInflater::new();
    let dialog = DialogController::new(
        Box::new(BottomSheetBehavior::new()),
        DialogStyle::default().cancel_on_touch_outside(input.cancel_on_touch_outside),
    );
    let _ = dialog.show(&ctx, &mut window, &inflater);

    for step in input.steps.into_iter().take(256) {
        match step {
            Step::Layout(height) => {
                if let Some(panel) = inflater.view(ViewId::BOTTOM_SHEET_PANEL) {
                    panel.layout(height);
                }
            }
            Step::Frame(progress) => ctx.manual_animator().step(progress),
            Step::FinishAnimations => {
                ctx.manual_animator().finish_all();
            }
            Step::Slide(offset) => {
                if let Some(controller) = ctx.sheet_controller() {
                    controller.slide(offset);
                }
            }
            Step::Drag(state) => {
                if let Some(controller) = ctx.sheet_controller() {
                    controller.drag_to(state.into());
                }
            }
            Step::Settle => {
                if let Some(controller) = ctx.sheet_controller() {
                    controller.settle();
                }
            }
            Step::Dismiss => dialog.dismiss(),
            Step::OutsideTap => {
                if let Some(root) = inflater.view(ViewId::BOTTOM_SHEET_ROOT) {
                    root.click();
                }
            }
            Step::Show => {
                let _ = dialog.show(&ctx, &mut window, &inflater);
            }
        }
    }
});
