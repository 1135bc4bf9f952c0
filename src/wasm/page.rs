//! Page-level glue: preference toggles, bilingual text and the custom cursor.

use super::host::{describe, AnimationFrames, LocalStorage};
use crate::cursor::{CursorTrail, Marker};
use crate::prefs::{Language, Preferences};
use crate::{BackdropError, RenderLoop};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    MouseEvent, Window,
};

pub(super) fn dom(e: wasm_bindgen::JsValue) -> BackdropError {
    BackdropError::Dom(describe(e))
}

/// Adds a listener that stays registered for the page's lifetime.
pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), BackdropError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom)?;
    closure.forget();
    Ok(())
}

pub(super) fn elements(
    document: &Document,
    selector: &str,
) -> Result<Vec<Element>, BackdropError> {
    let nodes = document.query_selector_all(selector).map_err(dom)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Sets `data-theme`, `dir` and `lang` on `<html>` and swaps every
/// bilingual text and placeholder to the current language.
pub fn apply_preferences(document: &Document, prefs: Preferences) -> Result<(), BackdropError> {
    let root = document
        .document_element()
        .ok_or_else(|| BackdropError::Dom("no document element".into()))?;
    root.set_attribute("data-theme", prefs.theme.as_str()).map_err(dom)?;
    root.set_attribute("dir", prefs.language.direction()).map_err(dom)?;
    root.set_attribute("lang", prefs.language.as_str()).map_err(dom)?;
    translate(document, prefs.language)
}

fn localized(element: &Element, attr_en: &str, attr_ar: &str, lang: Language) -> Option<String> {
    let en = element.get_attribute(attr_en)?;
    let ar = element.get_attribute(attr_ar);
    Some(lang.pick(&en, ar.as_deref().unwrap_or(&en)).to_owned())
}

fn translate(document: &Document, lang: Language) -> Result<(), BackdropError> {
    for element in elements(document, "[data-en]")? {
        if let Some(text) = localized(&element, "data-en", "data-ar", lang) {
            element.set_text_content(Some(&text));
        }
    }
    for element in elements(document, "[data-placeholder-en]")? {
        let Some(text) = localized(&element, "data-placeholder-en", "data-placeholder-ar", lang)
        else {
            continue;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_placeholder(&text);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_placeholder(&text);
        }
    }
    Ok(())
}

struct Toggles {
    prefs: Preferences,
    store: LocalStorage,
    document: Document,
}

impl Toggles {
    fn refresh(&self) {
        if let Err(e) = apply_preferences(&self.document, self.prefs) {
            log::warn!("could not apply preferences: {e}");
        }
    }
}

/// Restores the saved theme and language and wires `#themeToggle` and
/// `#langToggle`.
pub fn mount_preferences(window: &Window, document: &Document) -> Result<(), BackdropError> {
    let store = LocalStorage::open(window)?;
    let prefs = Preferences::load(&store)?;
    apply_preferences(document, prefs)?;

    let state = Rc::new(RefCell::new(Toggles {
        prefs,
        store,
        document: document.clone(),
    }));

    if let Some(button) = document.get_element_by_id("themeToggle") {
        let state = Rc::clone(&state);
        listen(&button, "click", move |_| {
            let mut guard = state.borrow_mut();
            let Toggles { prefs, store, .. } = &mut *guard;
            if let Err(e) = prefs.toggle_theme(store) {
                log::warn!("theme not saved: {e}");
            }
            guard.refresh();
        })?;
    }
    if let Some(button) = document.get_element_by_id("langToggle") {
        let state = Rc::clone(&state);
        listen(&button, "click", move |_| {
            let mut guard = state.borrow_mut();
            let Toggles { prefs, store, .. } = &mut *guard;
            if let Err(e) = prefs.toggle_language(store) {
                log::warn!("language not saved: {e}");
            }
            guard.refresh();
        })?;
    }
    Ok(())
}

/// Positions an element through its `left` / `top` style.
struct StyleMarker(HtmlElement);

impl Marker for StyleMarker {
    fn place(&mut self, at: DVec2) {
        let style = self.0.style();
        // set_property only throws on a read-only declaration block.
        let _ = style.set_property("left", &format!("{}px", at.x));
        let _ = style.set_property("top", &format!("{}px", at.y));
    }
}

pub(super) fn html(
    document: &Document,
    selector: &str,
) -> Result<Option<HtmlElement>, BackdropError> {
    Ok(document
        .query_selector(selector)
        .map_err(dom)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Drives `.cursor-dot` from mouse moves and eases `.cursor-outline` after
/// it every frame. Returns `false` when the page has no cursor elements.
pub fn mount_cursor(window: &Window, document: &Document) -> Result<bool, BackdropError> {
    let (Some(dot), Some(outline)) = (
        html(document, ".cursor-dot")?,
        html(document, ".cursor-outline")?,
    ) else {
        log::debug!("no cursor elements on this page");
        return Ok(false);
    };

    let trail = Rc::new(RefCell::new(CursorTrail::new(StyleMarker(outline))));
    {
        let trail = Rc::clone(&trail);
        let mut dot = StyleMarker(dot);
        listen(window, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let pointer = DVec2::new(mouse.client_x() as f64, mouse.client_y() as f64);
                dot.place(pointer);
                trail.borrow_mut().point_to(pointer);
            }
        })?;
    }
    RenderLoop::new(trail, Rc::new(AnimationFrames::new(window.clone()))).start()?;
    Ok(true)
}
