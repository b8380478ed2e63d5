use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::color::Rgba;
use crate::error::DotFieldError;
use crate::surface::{Blend, ColorStop, Surface};
use crate::viewport::ViewportState;

/// A `<canvas>` with its 2D context.
pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(window: Window, canvas: HtmlCanvasElement) -> Result<Self, DotFieldError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(DotFieldError::ContextUnavailable)?;
        Ok(Self {
            window,
            canvas,
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn container_size(&self) -> (f64, f64) {
        match self.canvas.parent_element() {
            Some(parent) => (
                f64::from(parent.client_width()),
                f64::from(parent.client_height()),
            ),
            None => (
                f64::from(self.canvas.client_width()),
                f64::from(self.canvas.client_height()),
            ),
        }
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn apply_viewport(&mut self, viewport: &ViewportState) {
        let (w, h) = viewport.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let style = self.canvas.style();
        let sized = style
            .set_property("width", &format!("{}px", viewport.width))
            .and_then(|_| style.set_property("height", &format!("{}px", viewport.height)));
        if let Err(e) = sized {
            log::warn!("could not size canvas element: {:?}", e);
        }

        let dpr = viewport.pixel_ratio;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("could not set canvas transform: {:?}", e);
        }
    }

    fn set_blend(&mut self, blend: Blend) {
        if let Err(e) = self
            .ctx
            .set_global_composite_operation(blend.composite_operation())
        {
            log::warn!("could not set composite operation: {:?}", e);
        }
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_shadow(&mut self, blur: f64, color: Rgba) {
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(&color.to_string());
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_vertical_gradient(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stops: &[ColorStop],
    ) {
        let gradient = self.ctx.create_linear_gradient(0.0, y, 0.0, y + height);
        for stop in stops {
            let offset = stop.offset.clamp(0.0, 1.0) as f32;
            if let Err(e) = gradient.add_color_stop(offset, &stop.color.to_string()) {
                log::warn!("bad gradient stop at {}: {:?}", stop.offset, e);
                return;
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}
