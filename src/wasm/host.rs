//! Browser implementations of the frame, viewport and storage collaborators.

use crate::prefs::PreferenceStore;
use crate::render_loop::FrameScheduler;
use crate::viewport::Viewport;
use crate::{BackdropError, Bounds};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Storage, Window};

pub(crate) fn describe(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// `window.requestAnimationFrame`.
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_next_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), BackdropError> {
        // Freed by wasm-bindgen after the single invocation.
        let f = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(f.unchecked_ref())
            .map(drop)
            .map_err(|e| BackdropError::Scheduler(describe(e)))
    }
}

/// `window.innerWidth` / `innerHeight` and the window `resize` event.
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn inner_size(window: &Window) -> Result<Bounds, BackdropError> {
    let px = |v: Result<JsValue, JsValue>| {
        v.map_err(|e| BackdropError::Dom(describe(e)))?
            .as_f64()
            .ok_or_else(|| BackdropError::Dom("viewport size is not a number".into()))
    };
    Ok(Bounds::new(
        px(window.inner_width())?,
        px(window.inner_height())?,
    ))
}

impl Viewport for WindowViewport {
    fn size(&self) -> Result<Bounds, BackdropError> {
        inner_size(&self.window)
    }

    fn on_resize(&self, mut handler: Box<dyn FnMut(Bounds)>) -> Result<(), BackdropError> {
        let window = self.window.clone();
        let resize_closure = Closure::wrap(Box::new(move || match inner_size(&window) {
            Ok(bounds) => handler(bounds),
            Err(e) => log::warn!("resize ignored: {e}"),
        }) as Box<dyn FnMut()>);
        self.window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .map_err(|e| BackdropError::Dom(describe(e)))?;
        // Listens for the rest of the page's life.
        resize_closure.forget();
        Ok(())
    }
}

/// `window.localStorage`.
pub struct LocalStorage(Storage);

impl LocalStorage {
    pub fn open(window: &Window) -> Result<Self, BackdropError> {
        window
            .local_storage()
            .map_err(|e| BackdropError::Storage(describe(e)))?
            .map(Self)
            .ok_or_else(|| BackdropError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, BackdropError> {
        self.0
            .get_item(key)
            .map_err(|e| BackdropError::Storage(describe(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackdropError> {
        self.0
            .set_item(key, value)
            .map_err(|e| BackdropError::Storage(describe(e)))
    }
}
