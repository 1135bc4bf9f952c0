//! Canvas 2D surface and the particle backdrop's browser wiring.

use super::host::{describe, AnimationFrames, WindowViewport};
use crate::{
    BackdropError, Bounds, FieldConfig, ParticleField, ParticleScene, RenderLoop, Rgba, Surface,
    ViewportAdapter,
};
use glam::DVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// Element id of the backdrop canvas.
pub const CANVAS_ID: &str = "particleCanvas";

/// A canvas and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BackdropError::SurfaceUnavailable(describe(e)))?
            .ok_or_else(|| BackdropError::SurfaceUnavailable("2d context not available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| BackdropError::SurfaceUnavailable("context is not 2d".into()))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_size(&mut self, bounds: Bounds) {
        self.canvas.set_width(bounds.width as u32);
        self.canvas.set_height(bounds.height as u32);
    }

    fn clear(&mut self) {
        let Bounds { width, height } = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, centre: DVec2, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        // arc only throws for a negative radius
        let _ = self.ctx.arc(centre.x, centre.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}

/// Starts the backdrop on `#particleCanvas`. Returns `false` when the page
/// has no such element.
pub fn mount_backdrop(window: &Window, document: &Document) -> Result<bool, BackdropError> {
    let Some(element) = document.get_element_by_id(CANVAS_ID) else {
        log::info!("no #{CANVAS_ID} on this page");
        return Ok(false);
    };
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BackdropError::SurfaceUnavailable(format!("#{CANVAS_ID} is not a canvas")))?;
    start(window, canvas)?;
    Ok(true)
}

/// Sizes `canvas` to the window, seeds the field and starts the render loop.
///
/// The canvas may carry a `data-config` attribute holding a JSON
/// [`FieldConfig`].
pub fn start(window: &Window, canvas: HtmlCanvasElement) -> Result<(), BackdropError> {
    let config = match canvas.get_attribute("data-config") {
        Some(json) => FieldConfig::from_json(&json)?,
        None => FieldConfig::default(),
    };

    let mut surface = CanvasSurface::acquire(canvas)?;
    let adapter = ViewportAdapter::new(WindowViewport::new(window.clone()), &mut surface)?;

    let seed = config
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
    let field = ParticleField::new(&surface, config, &mut SmallRng::seed_from_u64(seed));
    let Bounds { width, height } = field.bounds();
    log::info!(
        "particle backdrop: {} particles over {width}x{height} (seed {seed})",
        field.particles().len()
    );

    let scene = Rc::new(RefCell::new(ParticleScene::new(field, surface)));
    adapter.bind(Rc::clone(&scene))?;
    RenderLoop::new(scene, Rc::new(AnimationFrames::new(window.clone()))).start()
}
