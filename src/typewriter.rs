//! Typing animation for the hero title.

use crate::error::BackdropError;
use std::cell::RefCell;
use std::rc::Rc;

pub const HERO_TEXT: &str = "ANEXX";
pub const START_DELAY_MS: u32 = 500;
pub const STEP_MS: u32 = 150;

/// One-shot delayed callbacks (`setTimeout` in the browser).
pub trait Timer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<(), BackdropError>;
}

/// Where the typed text is shown.
pub trait TextSink {
    fn show(&mut self, text: &str);
}

/// Reveals `text` one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            typed: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.text.len()
    }

    /// Types the next character and returns the text so far.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.text[..self.typed].iter().collect())
    }
}

/// After `START_DELAY_MS`, clears the sink and types `text` into it, one
/// character immediately and then one every `STEP_MS`.
pub fn play<T, S>(timer: Rc<T>, sink: Rc<RefCell<S>>, text: &str) -> Result<(), BackdropError>
where
    T: Timer + 'static,
    S: TextSink + 'static,
{
    let writer = Typewriter::new(text);
    let next = Rc::clone(&timer);
    timer.after(
        START_DELAY_MS,
        Box::new(move || {
            sink.borrow_mut().show("");
            step(next, sink, writer);
        }),
    )
}

fn step<T, S>(timer: Rc<T>, sink: Rc<RefCell<S>>, mut writer: Typewriter)
where
    T: Timer + 'static,
    S: TextSink + 'static,
{
    let Some(typed) = writer.advance() else {
        return;
    };
    sink.borrow_mut().show(&typed);
    if writer.is_done() {
        return;
    }
    let next = Rc::clone(&timer);
    if let Err(e) = timer.after(STEP_MS, Box::new(move || step(next, sink, writer))) {
        log::warn!("typing stopped at {typed:?}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Queues timeouts and fires them in order, tracking virtual time.
    #[derive(Default)]
    struct ManualTimer {
        queue: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
        now: Cell<u32>,
    }

    impl ManualTimer {
        fn run(&self) {
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    if queue.is_empty() {
                        break;
                    }
                    queue.remove(0)
                };
                self.now.set(self.now.get() + next.0);
                (next.1)();
            }
        }
    }

    impl Timer for ManualTimer {
        fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<(), BackdropError> {
            self.queue.borrow_mut().push((delay_ms, callback));
            Ok(())
        }
    }

    struct Title {
        shown: Vec<(u32, String)>,
        clock: Rc<ManualTimer>,
    }

    impl TextSink for Title {
        fn show(&mut self, text: &str) {
            self.shown.push((self.clock.now.get(), text.to_owned()));
        }
    }

    #[test]
    fn advance_yields_growing_prefixes() {
        let mut writer = Typewriter::new("ANEXX");
        let typed: Vec<String> = std::iter::from_fn(|| writer.advance()).collect();
        assert_eq!(typed, ["A", "AN", "ANE", "ANEX", "ANEXX"]);
        assert!(writer.is_done());
    }

    #[test]
    fn multibyte_text_types_per_character() {
        let mut writer = Typewriter::new("مرحبا");
        assert_eq!(writer.advance().as_deref(), Some("م"));
        assert_eq!(writer.advance().as_deref(), Some("مر"));
    }

    #[test]
    fn hero_title_is_typed_on_schedule() {
        let timer = Rc::new(ManualTimer::default());
        let title = Rc::new(RefCell::new(Title {
            shown: Vec::new(),
            clock: Rc::clone(&timer),
        }));
        play(Rc::clone(&timer), Rc::clone(&title), HERO_TEXT).unwrap();
        assert!(title.borrow().shown.is_empty());

        timer.run();
        let shown = title.borrow().shown.clone();
        assert_eq!(
            shown,
            vec![
                (500, String::new()),
                (500, "A".into()),
                (650, "AN".into()),
                (800, "ANE".into()),
                (950, "ANEX".into()),
                (1100, "ANEXX".into()),
            ]
        );
    }

    #[test]
    fn empty_text_only_clears() {
        let timer = Rc::new(ManualTimer::default());
        let title = Rc::new(RefCell::new(Title {
            shown: Vec::new(),
            clock: Rc::clone(&timer),
        }));
        play(Rc::clone(&timer), Rc::clone(&title), "").unwrap();
        timer.run();
        assert_eq!(title.borrow().shown, vec![(500, String::new())]);
    }
}
