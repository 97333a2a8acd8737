//! The drawing seam between the engine and a 2D canvas.
//!
//! Method names and argument order mirror `CanvasRenderingContext2d` so the
//! browser implementation is a thin forwarder. Transform and alpha state is
//! scoped by `save`/`restore` the same way the canvas does it.

use crate::palette::Rgba;

pub type Point = (f64, f64);

pub trait Surface {
    /// Wipe the whole surface to transparent.
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    /// Global alpha multiplied into every fill and stroke until `restore`.
    fn set_alpha(&mut self, alpha: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);
    fn fill_ellipse(&mut self, center: Point, radii: Point, rotation: f64, color: Rgba);
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba);
    fn stroke_quadratic(&mut self, from: Point, control: Point, to: Point, color: Rgba, width: f64);
}
