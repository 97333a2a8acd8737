//! The four kinds of celebration pieces.
//!
//! Every piece is born with `life == 1.0` and loses its `decay` each update;
//! life doubles as the draw alpha.

use std::f64::consts::TAU;

use crate::palette::{self, Rgb};
use crate::surface::Surface;

pub const RIBBON_GRAVITY: f64 = 0.3;
pub const RIBBON_FRICTION: f64 = 0.98;
pub const CONFETTI_GRAVITY: f64 = 0.4;
pub const CONFETTI_FRICTION: f64 = 0.96;
pub const BALLOON_WOBBLE_STEP: f64 = 0.05;
pub const BALLOON_DECAY: f64 = 0.003;
pub const PETAL_SWAY_STEP: f64 = 0.03;
pub const PETAL_DECAY: f64 = 0.004;
/// Horizontal excursion per step added by balloon wobble and petal sway.
pub const DRIFT_AMPLITUDE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Ribbon,
    Balloon,
    Petal,
    Confetti,
}

/// `(rng - 0.5) * extent`: symmetric spread around zero.
fn spread(rng: &mut fastrand::Rng, extent: f64) -> f64 {
    (rng.f64() - 0.5) * extent
}

fn between(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    low + rng.f64() * (high - low)
}

/// Thrown piece with friction and gravity; shared by ribbons and confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct Tumbler {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub gravity: f64,
    pub friction: f64,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub life: f64,
    pub decay: f64,
    pub color: Rgb,
}

impl Tumbler {
    fn update(&mut self) {
        self.vx *= self.friction;
        self.vy *= self.friction;
        self.vy += self.gravity;
        self.x += self.vx;
        self.y += self.vy;
        self.rotation += self.spin;
        self.life -= self.decay;
    }

    /// Rectangle of `w` by `h` centered on the piece and turned by its rotation.
    fn draw_rect(&self, surface: &mut impl Surface, w: f64, h: f64) {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.rotation);
        surface.set_alpha(alpha(self.life));
        surface.fill_rect(-w / 2.0, -h / 2.0, w, h, self.color.opaque());
        surface.restore();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub wobble: f64,
    pub wobble_step: f64,
    pub life: f64,
    pub decay: f64,
    pub color: Rgb,
}

impl Balloon {
    fn update(&mut self) {
        self.wobble += self.wobble_step;
        self.x += self.vx + self.wobble.sin() * DRIFT_AMPLITUDE;
        self.y += self.vy;
        self.life -= self.decay;
    }

    fn draw(&self, surface: &mut impl Surface) {
        let s = self.size;
        surface.save();
        surface.set_alpha(alpha(self.life));

        surface.fill_ellipse((self.x, self.y), (s, s * 1.2), 0.0, self.color.opaque());
        surface.fill_ellipse(
            (self.x - s * 0.3, self.y - s * 0.3),
            (s * 0.2, s * 0.3),
            -0.5,
            palette::BALLOON_HIGHLIGHT,
        );

        let knot = self.y + s * 1.2;
        surface.stroke_quadratic(
            (self.x, knot),
            (self.x + (self.wobble * 2.0).sin() * 10.0, knot + 30.0),
            (self.x, knot + 60.0),
            palette::BALLOON_STRING,
            1.0,
        );

        surface.restore();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Petal {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub sway: f64,
    pub sway_step: f64,
    pub life: f64,
    pub decay: f64,
    pub color: Rgb,
}

impl Petal {
    fn update(&mut self) {
        self.sway += self.sway_step;
        self.x += self.vx + self.sway.sin() * DRIFT_AMPLITUDE;
        self.y += self.vy;
        self.rotation += self.spin;
        self.life -= self.decay;
    }

    fn draw(&self, surface: &mut impl Surface) {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.rotation);
        surface.set_alpha(alpha(self.life));
        surface.fill_ellipse((0.0, 0.0), (self.size, self.size * 0.6), 0.0, self.color.opaque());
        surface.restore();
    }
}

/// Canvas ignores alpha outside [0, 1] instead of clamping it.
fn alpha(life: f64) -> f64 {
    life.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Ribbon(Tumbler),
    Balloon(Balloon),
    Petal(Petal),
    Confetti(Tumbler),
}

impl Entity {
    pub fn ribbon(x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        Entity::Ribbon(Tumbler {
            x,
            y,
            vx: spread(rng, 25.0),
            vy: spread(rng, 25.0),
            gravity: RIBBON_GRAVITY,
            friction: RIBBON_FRICTION,
            size: between(rng, 4.0, 12.0),
            color: palette::pick(rng, palette::RIBBON),
            rotation: rng.f64() * TAU,
            spin: spread(rng, 0.3),
            life: 1.0,
            decay: between(rng, 0.005, 0.013),
        })
    }

    pub fn confetti(x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        Entity::Confetti(Tumbler {
            x,
            y,
            vx: spread(rng, 20.0),
            vy: spread(rng, 20.0),
            gravity: CONFETTI_GRAVITY,
            friction: CONFETTI_FRICTION,
            size: between(rng, 3.0, 9.0),
            color: palette::pick(rng, palette::CONFETTI),
            rotation: rng.f64() * TAU,
            spin: spread(rng, 0.4),
            life: 1.0,
            decay: between(rng, 0.005, 0.015),
        })
    }

    pub fn balloon(x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        Entity::Balloon(Balloon {
            x,
            y,
            vx: spread(rng, 3.0),
            vy: -between(rng, 5.0, 13.0),
            size: between(rng, 15.0, 35.0),
            color: palette::pick(rng, palette::BALLOON),
            wobble: rng.f64() * TAU,
            wobble_step: BALLOON_WOBBLE_STEP,
            life: 1.0,
            decay: BALLOON_DECAY,
        })
    }

    pub fn petal(x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        Entity::Petal(Petal {
            x,
            y,
            vx: spread(rng, 4.0),
            vy: between(rng, 2.0, 5.0),
            size: between(rng, 5.0, 13.0),
            rotation: rng.f64() * TAU,
            spin: spread(rng, 0.1),
            sway: rng.f64() * TAU,
            sway_step: PETAL_SWAY_STEP,
            color: palette::pick(rng, palette::PETAL),
            life: 1.0,
            decay: PETAL_DECAY,
        })
    }

    pub fn spawn(kind: Kind, x: f64, y: f64, rng: &mut fastrand::Rng) -> Self {
        match kind {
            Kind::Ribbon => Self::ribbon(x, y, rng),
            Kind::Balloon => Self::balloon(x, y, rng),
            Kind::Petal => Self::petal(x, y, rng),
            Kind::Confetti => Self::confetti(x, y, rng),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Entity::Ribbon(_) => Kind::Ribbon,
            Entity::Balloon(_) => Kind::Balloon,
            Entity::Petal(_) => Kind::Petal,
            Entity::Confetti(_) => Kind::Confetti,
        }
    }

    pub fn update(&mut self) {
        match self {
            Entity::Ribbon(t) | Entity::Confetti(t) => t.update(),
            Entity::Balloon(b) => b.update(),
            Entity::Petal(p) => p.update(),
        }
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        match self {
            Entity::Ribbon(t) => t.draw_rect(surface, t.size, t.size * 4.0),
            Entity::Confetti(t) => t.draw_rect(surface, t.size, t.size),
            Entity::Balloon(b) => b.draw(surface),
            Entity::Petal(p) => p.draw(surface),
        }
    }

    pub fn position(&self) -> (f64, f64) {
        match self {
            Entity::Ribbon(t) | Entity::Confetti(t) => (t.x, t.y),
            Entity::Balloon(b) => (b.x, b.y),
            Entity::Petal(p) => (p.x, p.y),
        }
    }

    pub fn velocity(&self) -> (f64, f64) {
        match self {
            Entity::Ribbon(t) | Entity::Confetti(t) => (t.vx, t.vy),
            Entity::Balloon(b) => (b.vx, b.vy),
            Entity::Petal(p) => (p.vx, p.vy),
        }
    }

    pub fn life(&self) -> f64 {
        match self {
            Entity::Ribbon(t) | Entity::Confetti(t) => t.life,
            Entity::Balloon(b) => b.life,
            Entity::Petal(p) => p.life,
        }
    }

    /// Faded out, or fallen to `floor` or below it.
    pub fn is_spent(&self, floor: f64) -> bool {
        self.life() <= 0.0 || self.position().1 >= floor
    }
}
