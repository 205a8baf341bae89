#![forbid(unsafe_code)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use ahash::AHashMap;
use dialogkit_core::{
    Background, ClickListener, Inflater, LayoutKind, MeasureCallback, View, ViewId, ViewRef,
};

/// An in-memory view node.
///
/// Measurement is driven by the test through [`FakeView::layout`]. Callbacks
/// registered before the first non-zero layout are queued and fire on it;
/// callbacks registered afterwards fire synchronously.
pub struct FakeView {
    id: ViewId,
    this: Weak<FakeView>,
    children: RefCell<Vec<Rc<FakeView>>>,
    measured_height: Cell<u32>,
    max_height: Cell<Option<u32>>,
    background: Cell<Option<Background>>,
    click: RefCell<Option<ClickListener>>,
    pending: RefCell<Vec<MeasureCallback>>,
}

impl std::fmt::Debug for FakeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeView")
            .field("id", &self.id)
            .field("measured_height", &self.measured_height.get())
            .field("children", &self.children.borrow().len())
            .finish()
    }
}

impl FakeView {
    pub fn new(id: ViewId) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            id,
            this: this.clone(),
            children: RefCell::new(Vec::new()),
            measured_height: Cell::new(0),
            max_height: Cell::new(None),
            background: Cell::new(None),
            click: RefCell::new(None),
            pending: RefCell::new(Vec::new()),
        })
    }

    /// Append a child view.
    pub fn push_child(&self, child: Rc<FakeView>) {
        self.children.borrow_mut().push(child);
    }

    /// This node as a trait-object handle.
    pub fn as_view_ref(&self) -> Option<ViewRef> {
        self.this.upgrade().map(|rc| rc as ViewRef)
    }

    /// Simulate a layout pass producing `height`.
    ///
    /// A non-zero height flushes every queued measurement callback, in
    /// registration order. The max-height cap, if any, is applied first.
    pub fn layout(&self, height: u32) {
        let height = match self.max_height.get() {
            Some(max) => height.min(max),
            None => height,
        };
        self.measured_height.set(height);
        if height == 0 {
            return;
        }
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        for callback in pending {
            callback(height);
        }
    }

    /// Simulate a tap on this view.
    ///
    /// Returns `false` if no listener was attached.
    pub fn click(&self) -> bool {
        let listener = self.click.borrow().clone();
        match listener {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }

    pub fn has_click_listener(&self) -> bool {
        self.click.borrow().is_some()
    }

    pub fn max_height(&self) -> Option<u32> {
        self.max_height.get()
    }

    pub fn background(&self) -> Option<Background> {
        self.background.get()
    }

    /// Number of measurement callbacks still waiting for a layout.
    pub fn pending_measurements(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl View for FakeView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn find(&self, id: ViewId) -> Option<ViewRef> {
        if self.id == id {
            return self.as_view_ref();
        }
        self.children
            .borrow()
            .iter()
            .find_map(|child| child.find(id))
    }

    fn measured_height(&self) -> u32 {
        self.measured_height.get()
    }

    fn on_measured(&self, callback: MeasureCallback) {
        let height = self.measured_height.get();
        if height > 0 {
            callback(height);
        } else {
            self.pending.borrow_mut().push(callback);
        }
    }

    fn set_max_height(&self, max_height: u32) {
        self.max_height.set(Some(max_height));
    }

    fn set_background(&self, background: Option<Background>) {
        self.background.set(background);
    }

    fn set_on_click(&self, listener: Option<ClickListener>) {
        *self.click.borrow_mut() = listener;
    }
}

/// Inflates the two dialog layouts and remembers the nodes it built.
#[derive(Default)]
pub struct FakeInflater {
    views: RefCell<AHashMap<ViewId, Rc<FakeView>>>,
    inflations: Cell<usize>,
}

impl FakeInflater {
    pub fn new() -> Self {
        Self::default()
    }

    /// A node from the most recent inflation.
    pub fn view(&self, id: ViewId) -> Option<Rc<FakeView>> {
        self.views.borrow().get(&id).cloned()
    }

    /// Total number of `inflate` calls.
    pub fn inflations(&self) -> usize {
        self.inflations.get()
    }

    fn register(&self, view: &Rc<FakeView>) {
        self.views.borrow_mut().insert(view.id, Rc::clone(view));
    }
}

impl Inflater for FakeInflater {
    fn inflate(&self, layout: LayoutKind) -> ViewRef {
        self.inflations.set(self.inflations.get() + 1);
        self.views.borrow_mut().clear();

        let content = FakeView::new(ViewId::DIALOG_LAYOUT);
        self.register(&content);

        let root = match layout {
            LayoutKind::ModalBase => content,
            LayoutKind::BottomSheetBase => {
                let panel = FakeView::new(ViewId::BOTTOM_SHEET_PANEL);
                panel.push_child(content);
                self.register(&panel);

                let root = FakeView::new(ViewId::BOTTOM_SHEET_ROOT);
                root.push_child(panel);
                self.register(&root);
                root
            }
        };
        root
    }
}
