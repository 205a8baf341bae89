#![forbid(unsafe_code)]

use std::cell::RefCell;

use dialogkit_core::{Animator, FrameCallback, PropertyAnimation};

struct Running {
    animation: PropertyAnimation,
    on_frame: FrameCallback,
}

/// An animator that only advances when the test tells it to.
#[derive(Default)]
pub struct ManualAnimator {
    running: RefCell<Vec<Running>>,
    started: RefCell<Vec<PropertyAnimation>>,
}

impl std::fmt::Debug for ManualAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualAnimator")
            .field("running", &self.running.borrow().len())
            .field("started", &self.started.borrow().len())
            .finish()
    }
}

impl ManualAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every animation ever started, in order.
    pub fn started(&self) -> Vec<PropertyAnimation> {
        self.started.borrow().clone()
    }

    /// Number of animations that have not finished.
    pub fn running(&self) -> usize {
        self.running.borrow().len()
    }

    /// Deliver one frame at `progress` to every running animation.
    pub fn step(&self, progress: f32) {
        let mut running = std::mem::take(&mut *self.running.borrow_mut());
        for anim in &mut running {
            let value = anim.animation.value_at(progress);
            (anim.on_frame)(value);
        }
        // Keep animations started from inside a frame callback.
        let mut slot = self.running.borrow_mut();
        running.append(&mut *slot);
        *slot = running;
    }

    /// Run every running animation to its end value and drop it.
    ///
    /// Returns the number of animations finished.
    pub fn finish_all(&self) -> usize {
        let running = std::mem::take(&mut *self.running.borrow_mut());
        let count = running.len();
        for mut anim in running {
            (anim.on_frame)(anim.animation.to);
        }
        count
    }
}

impl Animator for ManualAnimator {
    fn animate(&self, animation: PropertyAnimation, on_frame: FrameCallback) {
        tracing::debug!(
            from = animation.from,
            to = animation.to,
            duration_ms = animation.duration.as_millis() as u64,
            "animation queued"
        );
        self.started.borrow_mut().push(animation);
        self.running.borrow_mut().push(Running {
            animation,
            on_frame,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn frames_follow_progress_then_finish() {
        let animator = ManualAnimator::new();
        let value = Rc::new(Cell::new(0));
        let sink = Rc::clone(&value);
        animator.animate(
            PropertyAnimation::new(600, 400, Duration::from_millis(1000)),
            Box::new(move |v| sink.set(v)),
        );
        assert_eq!(animator.running(), 1);

        animator.step(0.5);
        assert_eq!(value.get(), 500);
        assert_eq!(animator.running(), 1);

        assert_eq!(animator.finish_all(), 1);
        assert_eq!(value.get(), 400);
        assert_eq!(animator.running(), 0);
        assert_eq!(animator.started().len(), 1);
    }
}
