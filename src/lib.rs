//! Animated particle backdrop for the portfolio page.
//!
//! The simulation and its collaborators ([`Surface`], [`FrameScheduler`],
//! [`Viewport`]) are plain Rust and build on any target; the browser
//! bindings live in `wasm` and only compile for wasm32.

pub mod config;
pub mod cursor;
pub mod error;
pub mod field;
pub mod particle;
pub mod prefs;
pub mod render_loop;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod spotlight;
pub mod surface;
pub mod typewriter;
pub mod viewport;

pub use config::FieldConfig;
pub use error::BackdropError;
pub use field::{Connection, ParticleField, TickStats};
pub use particle::Particle;
pub use render_loop::{Animation, FrameScheduler, RenderLoop};
pub use scene::ParticleScene;
pub use surface::{Bounds, Rgba, Surface};
pub use viewport::{Viewport, ViewportAdapter};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    mod effects;
    mod host;
    mod page;
    mod render;

    pub use effects::{mount_reveal, mount_scroll_chrome, mount_spotlight, mount_typewriter};
    pub use host::{AnimationFrames, LocalStorage, WindowViewport};
    pub use page::{apply_preferences, mount_cursor, mount_preferences};
    pub use render::{mount_backdrop, start, CanvasSurface, CANVAS_ID};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Every feature is cosmetic: report failures and keep the page usable.
        if let Err(e) = mount_preferences(&window, &document) {
            log::warn!("preferences disabled: {e}");
        }
        match mount_backdrop(&window, &document) {
            Ok(_) => {}
            Err(crate::BackdropError::SurfaceUnavailable(reason)) => {
                log::info!("particle backdrop skipped: {reason}");
            }
            Err(e) => log::warn!("particle backdrop disabled: {e}"),
        }
        if let Err(e) = mount_cursor(&window, &document) {
            log::warn!("custom cursor disabled: {e}");
        }
        if let Err(e) = mount_typewriter(&window, &document) {
            log::warn!("hero typing disabled: {e}");
        }
        if let Err(e) = mount_scroll_chrome(&window, &document) {
            log::warn!("scroll chrome disabled: {e}");
        }
        match mount_reveal(&document) {
            Ok(n) => log::debug!("{n} elements reveal on scroll"),
            Err(e) => log::warn!("scroll reveal disabled: {e}"),
        }
        if let Err(e) = mount_spotlight(&document) {
            log::warn!("card spotlight disabled: {e}");
        }
        Ok(())
    }
}
