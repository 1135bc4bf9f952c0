//! Keeps the drawing surface the size of the viewport.

use crate::error::BackdropError;
use crate::scene::ParticleScene;
use crate::surface::{Bounds, Surface};
use std::cell::RefCell;
use std::rc::Rc;

/// Source of the viewport size and its change events.
pub trait Viewport {
    fn size(&self) -> Result<Bounds, BackdropError>;

    /// Calls `handler` with the new size on every resize event.
    fn on_resize(&self, handler: Box<dyn FnMut(Bounds)>) -> Result<(), BackdropError>;
}

/// Sizes a surface to the viewport and forwards resizes to the field.
pub struct ViewportAdapter<V> {
    viewport: V,
}

impl<V: Viewport> ViewportAdapter<V> {
    /// Sets `surface` to the current viewport size.
    pub fn new<S: Surface + ?Sized>(viewport: V, surface: &mut S) -> Result<Self, BackdropError> {
        surface.set_size(viewport.size()?);
        Ok(Self { viewport })
    }

    /// Applies every resize event to the scene, immediately and without
    /// debouncing.
    pub fn bind<S: Surface + 'static>(
        &self,
        scene: Rc<RefCell<ParticleScene<S>>>,
    ) -> Result<(), BackdropError> {
        self.viewport
            .on_resize(Box::new(move |bounds| scene.borrow_mut().resize(bounds)))
    }
}
