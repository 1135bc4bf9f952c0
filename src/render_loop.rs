//! Per-frame scheduling.
//!
//! Every frame re-registers itself with the host's frame callback
//! (`requestAnimationFrame` in the browser) so pacing follows the display's
//! refresh rate instead of a fixed timer.

use crate::error::BackdropError;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs a callback on the next display refresh.
pub trait FrameScheduler {
    fn request_next_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), BackdropError>;
}

/// Something advanced once per frame.
pub trait Animation {
    fn frame(&mut self);
}

/// Drives an [`Animation`] forever.
pub struct RenderLoop<A, F> {
    animation: Rc<RefCell<A>>,
    scheduler: Rc<F>,
}

impl<A, F> RenderLoop<A, F>
where
    A: Animation + 'static,
    F: FrameScheduler + 'static,
{
    pub fn new(animation: Rc<RefCell<A>>, scheduler: Rc<F>) -> Self {
        Self {
            animation,
            scheduler,
        }
    }

    /// Registers the first frame. Each frame runs the animation once and then
    /// registers the next, with no exit condition; only a scheduler failure
    /// ends the loop.
    pub fn start(self) -> Result<(), BackdropError> {
        Rc::new(self).schedule()
    }

    fn schedule(self: Rc<Self>) -> Result<(), BackdropError> {
        let scheduler = Rc::clone(&self.scheduler);
        scheduler.request_next_frame(Box::new(move || {
            self.animation.borrow_mut().frame();
            if let Err(e) = self.schedule() {
                log::error!("render loop stopped: {e}");
            }
        }))
    }
}

/// A scheduler that queues callbacks until the test fires them.
#[cfg(test)]
pub(crate) mod manual {
    use super::*;

    #[derive(Default)]
    pub struct ManualFrames {
        pending: RefCell<Vec<Box<dyn FnOnce()>>>,
        pub refuse: std::cell::Cell<bool>,
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Fires every callback queued before this call.
        pub fn advance(&self) {
            let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for callback in due {
                callback();
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        fn request_next_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), BackdropError> {
            if self.refuse.get() {
                return Err(BackdropError::Scheduler("refused".into()));
            }
            self.pending.borrow_mut().push(callback);
            Ok(())
        }
    }
}
