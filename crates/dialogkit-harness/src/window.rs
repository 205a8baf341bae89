#![forbid(unsafe_code)]

use dialogkit_core::{Background, Size, Window, WindowAttributes};

/// A window with a fixed available size that records every write.
#[derive(Debug, Clone, Default)]
pub struct FakeWindow {
    size: Option<Size>,
    attributes: WindowAttributes,
    background: Option<Background>,
    attribute_writes: usize,
    background_writes: usize,
}

impl FakeWindow {
    /// A window reporting `size` as available.
    pub fn new(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// A window that cannot report its size.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Change the reported size (e.g. rotation).
    pub fn resize(&mut self, size: Size) {
        self.size = Some(size);
    }

    /// Seed a background as if a theme had set one.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    /// Number of `set_attributes` calls.
    pub fn attribute_writes(&self) -> usize {
        self.attribute_writes
    }

    /// Number of `set_background` calls.
    pub fn background_writes(&self) -> usize {
        self.background_writes
    }
}

impl Window for FakeWindow {
    fn available_size(&self) -> Option<Size> {
        self.size
    }

    fn attributes(&self) -> WindowAttributes {
        self.attributes
    }

    fn set_attributes(&mut self, attributes: WindowAttributes) {
        self.attribute_writes += 1;
        self.attributes = attributes;
    }

    fn background(&self) -> Option<Background> {
        self.background
    }

    fn set_background(&mut self, background: Option<Background>) {
        self.background_writes += 1;
        self.background = background;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogkit_core::{Dimension, PackedRgba};

    #[test]
    fn writes_are_counted() {
        let mut window = FakeWindow::new(Size::new(100, 200));
        window.set_attributes(WindowAttributes::default().width(Dimension::Exact(50)));
        window.set_background(None);
        window.set_background(Some(Background::rounded(PackedRgba::WHITE, 2.0)));
        assert_eq!(window.attribute_writes(), 1);
        assert_eq!(window.background_writes(), 2);
        assert_eq!(window.attributes().width, Dimension::Exact(50));
    }

    #[test]
    fn detached_has_no_size() {
        assert_eq!(FakeWindow::detached().available_size(), None);
    }
}
