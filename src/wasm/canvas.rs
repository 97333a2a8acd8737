use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SetupError;
use crate::palette::Rgba;
use crate::surface::{Point, Surface};

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| SetupError::NoContext(canvas.id()))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the pixel buffer to the given CSS size.
    pub fn fit(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    #[allow(deprecated)]
    fn fill_with(&self, color: Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn stroke_with(&self, color: Rgba, width: f64) {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_circle(&mut self, (x, y): Point, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.fill_with(color);
    }

    #[allow(deprecated)]
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_ellipse(&mut self, (x, y): Point, (rx, ry): Point, rotation: f64, color: Rgba) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(x, y, rx, ry, rotation, 0.0, TAU);
        self.fill_with(color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.stroke_with(color, 1.0);
    }

    fn stroke_quadratic(&mut self, from: Point, control: Point, to: Point, color: Rgba, width: f64) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0, from.1);
        self.ctx.quadratic_curve_to(control.0, control.1, to.0, to.1);
        self.stroke_with(color, width);
    }
}
