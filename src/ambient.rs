//! Background field of slowly drifting dots joined by faint gold lines.

use crate::config::AmbientConfig;
use crate::palette::{self, Rgb};
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub opacity: f64,
    pub tint: Rgb,
}

impl Particle {
    fn random(rng: &mut fastrand::Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            radius: rng.f64() * 3.0 + 1.0,
            vx: (rng.f64() - 0.5) * 0.5,
            vy: (rng.f64() - 0.5) * 0.5,
            opacity: rng.f64() * 0.5 + 0.2,
            tint: palette::pick(rng, palette::AMBIENT),
        }
    }

    /// Move one step, then wrap each axis to the opposite edge once.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 {
            self.x = width;
        }
        if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
        if self.y > height {
            self.y = 0.0;
        }
    }
}

/// A connection between particles `a` and `b` (indices, `a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f64,
}

pub struct ParticleField {
    config: AmbientConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: fastrand::Rng,
}

impl ParticleField {
    pub fn new(config: AmbientConfig, width: f64, height: f64, seed: u64) -> Self {
        let mut field = Self::with_particles(config, width, height, Vec::new());
        field.rng = fastrand::Rng::with_seed(seed);
        field.init();
        field
    }

    pub fn with_particles(
        config: AmbientConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            config,
            width,
            height,
            particles,
            rng: fastrand::Rng::with_seed(0),
        }
    }

    /// Replace the whole pool with fresh particles spread over the current size.
    pub fn init(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..self.config.count)
            .map(|_| Particle::random(rng, w, h))
            .collect();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.init();
        log::debug!("ambient field reseeded at {width}x{height}");
    }

    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.advance(self.width, self.height);
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();

        for p in &self.particles {
            surface.fill_circle((p.x, p.y), p.radius, p.tint.alpha(p.opacity));
        }

        for link in self.links() {
            let (a, b) = (&self.particles[link.a], &self.particles[link.b]);
            surface.stroke_line((a.x, a.y), (b.x, b.y), palette::GOLD.alpha(link.alpha));
        }
    }

    /// Every unordered pair closer than the link distance, once.
    ///
    /// Plain pairwise scan: fine for a few dozen particles, a grid would be
    /// needed well before a few thousand.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.config.link_distance;
        let peak = self.config.link_alpha;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            (a + 1..ps.len()).filter_map(move |b| {
                let d = (ps[a].x - ps[b].x).hypot(ps[a].y - ps[b].y);
                (d < max).then(|| Link {
                    a,
                    b,
                    alpha: peak * (1.0 - d / max),
                })
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
