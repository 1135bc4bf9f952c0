//! Navbar shadow and back-to-top button, toggled by scroll position.
//!
//! Scroll events fire far more often than frames, so at most one frame is
//! pending at a time and the position is read when that frame runs.

use crate::error::BackdropError;
use crate::render_loop::FrameScheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Scroll offset past which the page counts as scrolled.
pub const SCROLLED_AFTER: f64 = 100.0;

/// The page chrome that reacts to scrolling.
pub trait ScrollChrome {
    fn scroll_y(&self) -> f64;

    /// Adds or removes the `scrolled` navbar / `visible` back-to-top state.
    fn set_scrolled(&mut self, scrolled: bool);
}

pub struct ScrollWatcher<C, F> {
    chrome: Rc<RefCell<C>>,
    scheduler: Rc<F>,
    pending: Rc<Cell<bool>>,
}

impl<C, F> ScrollWatcher<C, F>
where
    C: ScrollChrome + 'static,
    F: FrameScheduler,
{
    pub fn new(chrome: Rc<RefCell<C>>, scheduler: Rc<F>) -> Self {
        Self {
            chrome,
            scheduler,
            pending: Rc::new(Cell::new(false)),
        }
    }

    /// Call on every scroll event. Schedules one update unless a frame is
    /// already pending.
    pub fn on_scroll(&self) -> Result<(), BackdropError> {
        if self.pending.replace(true) {
            return Ok(());
        }
        let chrome = Rc::clone(&self.chrome);
        let pending = Rc::clone(&self.pending);
        let result = self.scheduler.request_next_frame(Box::new(move || {
            let mut chrome = chrome.borrow_mut();
            let scrolled = chrome.scroll_y() > SCROLLED_AFTER;
            chrome.set_scrolled(scrolled);
            pending.set(false);
        }));
        if result.is_err() {
            self.pending.set(false);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_loop::manual::ManualFrames;

    #[derive(Default)]
    struct Page {
        y: f64,
        scrolled: Vec<bool>,
    }

    impl ScrollChrome for Page {
        fn scroll_y(&self) -> f64 {
            self.y
        }

        fn set_scrolled(&mut self, scrolled: bool) {
            self.scrolled.push(scrolled);
        }
    }

    fn watcher() -> (ScrollWatcher<Page, ManualFrames>, Rc<RefCell<Page>>, Rc<ManualFrames>) {
        let page = Rc::new(RefCell::new(Page::default()));
        let frames = Rc::new(ManualFrames::default());
        let watcher = ScrollWatcher::new(Rc::clone(&page), Rc::clone(&frames));
        (watcher, page, frames)
    }

    #[test]
    fn bursts_of_scroll_events_share_one_frame() {
        let (watcher, page, frames) = watcher();
        for _ in 0..5 {
            watcher.on_scroll().unwrap();
        }
        assert_eq!(frames.pending(), 1);
        page.borrow_mut().y = 250.0;
        frames.advance();
        assert_eq!(page.borrow().scrolled, vec![true]);

        watcher.on_scroll().unwrap();
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn threshold_is_exclusive() {
        let (watcher, page, frames) = watcher();
        page.borrow_mut().y = 100.0;
        watcher.on_scroll().unwrap();
        frames.advance();
        page.borrow_mut().y = 100.5;
        watcher.on_scroll().unwrap();
        frames.advance();
        page.borrow_mut().y = 0.0;
        watcher.on_scroll().unwrap();
        frames.advance();
        assert_eq!(page.borrow().scrolled, vec![false, true, false]);
    }

    #[test]
    fn refused_frame_does_not_block_later_scrolls() {
        let (watcher, _page, frames) = watcher();
        frames.refuse.set(true);
        assert!(watcher.on_scroll().is_err());
        frames.refuse.set(false);
        watcher.on_scroll().unwrap();
        assert_eq!(frames.pending(), 1);
    }
}
