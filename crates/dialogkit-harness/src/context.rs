#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use dialogkit_core::{Animator, Context, Dimensions, SheetController, ViewId, ViewRef};

use crate::animator::ManualAnimator;
use crate::sheet::{FakeSheetController, SettleMode};

/// Host context backed by a [`ManualAnimator`] and [`FakeSheetController`]s.
///
/// Attaching a controller to the same panel twice returns the same
/// controller, as a real toolkit would.
#[derive(Debug)]
pub struct FakeContext {
    dimensions: Dimensions,
    animator: Rc<ManualAnimator>,
    settle_mode: SettleMode,
    controllers: RefCell<AHashMap<ViewId, Rc<FakeSheetController>>>,
}

impl Default for FakeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeContext {
    pub fn new() -> Self {
        Self {
            dimensions: Dimensions::default(),
            animator: Rc::new(ManualAnimator::new()),
            settle_mode: SettleMode::Immediate,
            controllers: RefCell::new(AHashMap::new()),
        }
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Settle mode for controllers attached after this call.
    pub fn with_settle_mode(mut self, mode: SettleMode) -> Self {
        self.settle_mode = mode;
        self
    }

    /// The concrete animator, for stepping animations.
    pub fn manual_animator(&self) -> Rc<ManualAnimator> {
        Rc::clone(&self.animator)
    }

    /// The controller attached to the bottom sheet panel, if any.
    pub fn sheet_controller(&self) -> Option<Rc<FakeSheetController>> {
        self.controllers
            .borrow()
            .get(&ViewId::BOTTOM_SHEET_PANEL)
            .cloned()
    }
}

impl Context for FakeContext {
    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn animator(&self) -> Rc<dyn Animator> {
        Rc::clone(&self.animator) as Rc<dyn Animator>
    }

    fn attach_sheet_controller(&self, panel: &ViewRef) -> Rc<dyn SheetController> {
        let mode = self.settle_mode;
        let controller = Rc::clone(
            self.controllers
                .borrow_mut()
                .entry(panel.id())
                .or_insert_with(|| Rc::new(FakeSheetController::new(mode))),
        );
        controller as Rc<dyn SheetController>
    }
}
