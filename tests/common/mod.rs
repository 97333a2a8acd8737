#![allow(dead_code)]

use celebrate_wasm::palette::Rgba;
use celebrate_wasm::surface::{Point, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Alpha(f64),
    Circle(Point, f64, Rgba),
    Rect(f64, f64, f64, f64, Rgba),
    Ellipse(Point, Point, f64, Rgba),
    Line(Point, Point, Rgba),
    Quadratic(Point, Point, Point, Rgba, f64),
}

/// Surface that remembers every call.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<(Point, Point, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b, c) => Some((*a, *b, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Surface for Recorder {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }
    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.ops.push(Op::Circle(center, radius, color));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ops.push(Op::Rect(x, y, w, h, color));
    }
    fn fill_ellipse(&mut self, center: Point, radii: Point, rotation: f64, color: Rgba) {
        self.ops.push(Op::Ellipse(center, radii, rotation, color));
    }
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.ops.push(Op::Line(from, to, color));
    }
    fn stroke_quadratic(&mut self, from: Point, control: Point, to: Point, color: Rgba, width: f64) {
        self.ops.push(Op::Quadratic(from, control, to, color, width));
    }
}
