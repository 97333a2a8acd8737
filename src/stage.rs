//! Everything that changes per frame, advanced by a single tick.

use crate::ambient::ParticleField;
use crate::celebration::Celebration;
use crate::choreography::{Choreography, Cue};
use crate::config::Config;
use crate::surface::Surface;

pub struct Stage {
    ambient: ParticleField,
    celebration: Celebration,
    choreography: Choreography,
}

impl Stage {
    pub fn new(config: Config, width: f64, height: f64, seed: u64) -> Self {
        Self {
            ambient: ParticleField::new(config.ambient, width, height, seed),
            celebration: Celebration::new(config.celebration, width, height, seed ^ 0x9e37_79b9),
            choreography: Choreography::new(config.transition),
        }
    }

    /// Fire the whole sequence. Returns `false` on every call after the first.
    pub fn trigger(&mut self, now: f64) -> bool {
        if !self.choreography.trigger(now) {
            return false;
        }
        let (cx, cy) = self.celebration.center();
        self.celebration.start(cx, cy, now);
        true
    }

    /// Advance one frame and return the transition cues that came due.
    pub fn tick<A, C>(&mut self, now: f64, ambient: &mut A, celebration: &mut C) -> Vec<Cue>
    where
        A: Surface,
        C: Surface,
    {
        self.ambient.update();
        self.ambient.render(ambient);

        if self.celebration.is_running() {
            self.celebration.step(now, celebration);
        }

        self.choreography.poll(now)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.ambient.resize(width, height);
        self.celebration.resize(width, height);
    }

    pub fn ambient(&self) -> &ParticleField {
        &self.ambient
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    pub fn choreography(&self) -> &Choreography {
        &self.choreography
    }
}
