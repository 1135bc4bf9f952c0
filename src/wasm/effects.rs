//! Scroll reveal, scroll-dependent chrome, card spotlight and the hero
//! typing animation.

use super::host::{describe, AnimationFrames};
use super::page::{dom, elements, listen};
use crate::reveal::{
    progress_width, HIDDEN_CLASS, PROGRESS_ATTR, PROGRESS_SELECTOR, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, SHOWN_CLASS, SKILL_CLASS,
};
use crate::scroll::{ScrollChrome, ScrollWatcher};
use crate::spotlight::{css_vars, spotlight, CARD_SELECTOR};
use crate::typewriter::{play, TextSink, Timer, HERO_TEXT};
use crate::BackdropError;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

fn fill_progress(target: &Element) {
    if !target.class_list().contains(SKILL_CLASS) {
        return;
    }
    let Ok(Some(bar)) = target.query_selector(PROGRESS_SELECTOR) else {
        return;
    };
    let Some(width) = bar.get_attribute(PROGRESS_ATTR).as_deref().and_then(progress_width) else {
        log::debug!("skill bar without a usable {PROGRESS_ATTR}");
        return;
    };
    if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
        if let Err(e) = bar.style().set_property("width", &width) {
            log::debug!("skill bar width not set: {}", describe(e));
        }
    }
}

/// Hides every reveal target and shows each one the first time enough of
/// it scrolls into view. Returns how many elements are observed.
pub fn mount_reveal(document: &Document) -> Result<usize, BackdropError> {
    let targets = elements(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(0);
    }

    let on_intersect = Closure::wrap(Box::new(|entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            if let Err(e) = target.class_list().add_1(SHOWN_CLASS) {
                log::debug!("reveal skipped: {}", describe(e));
            }
            fill_progress(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
            .map_err(dom)?;
    // The observer calls back for the rest of the page's life.
    on_intersect.forget();

    for target in &targets {
        target.class_list().add_1(HIDDEN_CLASS).map_err(dom)?;
        observer.observe(target);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(targets.len())
}

/// `#navbar` and `#scrollTop`, either of which may be missing.
struct PageChrome {
    window: Window,
    navbar: Option<Element>,
    back_to_top: Option<Element>,
}

impl ScrollChrome for PageChrome {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_scrolled(&mut self, scrolled: bool) {
        let toggles = [
            (&self.navbar, "scrolled"),
            (&self.back_to_top, "visible"),
        ];
        for (element, class) in toggles {
            if let Some(element) = element {
                if let Err(e) = element.class_list().toggle_with_force(class, scrolled) {
                    log::debug!("could not toggle .{class}: {}", describe(e));
                }
            }
        }
    }
}

/// Marks the navbar `scrolled` and shows the back-to-top button once the
/// page is scrolled past the threshold. Returns `false` when the page has
/// neither element.
pub fn mount_scroll_chrome(window: &Window, document: &Document) -> Result<bool, BackdropError> {
    let navbar = document.get_element_by_id("navbar");
    let back_to_top = document.get_element_by_id("scrollTop");
    if navbar.is_none() && back_to_top.is_none() {
        return Ok(false);
    }

    let chrome = Rc::new(RefCell::new(PageChrome {
        window: window.clone(),
        navbar,
        back_to_top,
    }));
    let watcher = ScrollWatcher::new(chrome, Rc::new(AnimationFrames::new(window.clone())));
    listen(window, "scroll", move |_| {
        if let Err(e) = watcher.on_scroll() {
            log::warn!("scroll update dropped: {e}");
        }
    })?;
    Ok(true)
}

/// Tracks the pointer over each project card as `--x` / `--y`. Returns the
/// number of cards wired.
pub fn mount_spotlight(document: &Document) -> Result<usize, BackdropError> {
    let cards: Vec<HtmlElement> = elements(document, CARD_SELECTOR)?
        .into_iter()
        .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
        .collect();

    for card in &cards {
        let target = card.clone();
        listen(card, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let offset = spotlight(
                DVec2::new(mouse.client_x() as f64, mouse.client_y() as f64),
                DVec2::new(rect.left(), rect.top()),
            );
            let style = target.style();
            for (name, value) in css_vars(offset) {
                // set_property only throws on a read-only declaration block.
                let _ = style.set_property(name, &value);
            }
        })?;
    }
    Ok(cards.len())
}

/// `window.setTimeout`.
struct TimeoutTimer(Window);

impl Timer for TimeoutTimer {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<(), BackdropError> {
        let f = Closure::once_into_js(move || callback());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self.0
            .set_timeout_with_callback_and_timeout_and_arguments_0(f.unchecked_ref(), delay)
            .map(drop)
            .map_err(|e| BackdropError::Scheduler(describe(e)))
    }
}

struct HeroTitle(Element);

impl TextSink for HeroTitle {
    fn show(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Types the hero title into `#heroTitle`. Returns `false` when the page has
/// no hero title.
pub fn mount_typewriter(window: &Window, document: &Document) -> Result<bool, BackdropError> {
    let Some(title) = document.get_element_by_id("heroTitle") else {
        return Ok(false);
    };
    play(
        Rc::new(TimeoutTimer(window.clone())),
        Rc::new(RefCell::new(HeroTitle(title))),
        HERO_TEXT,
    )?;
    Ok(true)
}
