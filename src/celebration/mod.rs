//! One-shot celebration burst: waves of ribbons, confetti, balloons and petals.
//!
//! Ribbons and confetti are spawned synchronously by [`Celebration::start`];
//! balloons and petals are queued on a [`Timeline`] and injected by
//! [`Celebration::step`] once their due time has passed. The run stays
//! active until both the live pieces and the queue are exhausted.

mod entity;

pub use entity::{
    Balloon, Entity, Kind, Petal, Tumbler, BALLOON_DECAY, BALLOON_WOBBLE_STEP, CONFETTI_FRICTION,
    CONFETTI_GRAVITY, DRIFT_AMPLITUDE, PETAL_DECAY, PETAL_SWAY_STEP, RIBBON_FRICTION,
    RIBBON_GRAVITY,
};

use crate::config::CelebrationConfig;
use crate::surface::Surface;
use crate::timeline::Timeline;

/// Petals enter just above the top edge.
const PETAL_ENTRY_Y: f64 = -20.0;
const BALLOON_JITTER: (f64, f64) = (200.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Spawn {
    kind: Kind,
    origin: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

pub struct Celebration {
    config: CelebrationConfig,
    width: f64,
    height: f64,
    live: Vec<Entity>,
    pending: Timeline<Spawn>,
    state: RunState,
    rng: fastrand::Rng,
}

impl Celebration {
    pub fn new(config: CelebrationConfig, width: f64, height: f64, seed: u64) -> Self {
        Self {
            config,
            width,
            height,
            live: Vec::new(),
            pending: Timeline::new(),
            state: RunState::Idle,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Live pieces keep their logical positions; only the bounds change.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Launch all four waves around `(cx, cy)`. Delayed waves are timed from `now`.
    pub fn start(&mut self, cx: f64, cy: f64, now: f64) {
        let cfg = &self.config;

        for _ in 0..cfg.ribbons {
            self.live.push(Entity::ribbon(cx, cy, &mut self.rng));
        }

        for i in 0..cfg.balloons {
            self.pending.push(
                now + i as f64 * cfg.balloon_interval_ms,
                Spawn {
                    kind: Kind::Balloon,
                    origin: (cx, cy),
                },
            );
        }

        for i in 0..cfg.petals {
            self.pending.push(
                now + i as f64 * cfg.petal_interval_ms,
                Spawn {
                    kind: Kind::Petal,
                    origin: (cx, cy),
                },
            );
        }

        for _ in 0..cfg.confetti {
            self.live.push(Entity::confetti(cx, cy, &mut self.rng));
        }

        self.state = RunState::Running;
        log::info!(
            "celebration started: {} live, {} queued",
            self.live.len(),
            self.pending.len()
        );
    }

    /// Add one piece to the live set and mark the run active.
    pub fn spawn(&mut self, entity: Entity) {
        self.live.push(entity);
        self.state = RunState::Running;
    }

    /// One frame: inject due spawns, update and draw every live piece, then
    /// drop the spent ones. Does nothing while idle.
    pub fn step(&mut self, now: f64, surface: &mut impl Surface) {
        if self.state == RunState::Idle {
            return;
        }

        while let Some(spawn) = self.pending.pop_due(now) {
            let entity = self.materialize(spawn);
            self.live.push(entity);
        }

        surface.clear();
        for entity in &mut self.live {
            entity.update();
            entity.draw(surface);
        }

        let floor = self.height + self.config.bottom_margin;
        self.live.retain(|e| !e.is_spent(floor));

        if self.live.is_empty() && self.pending.is_empty() {
            surface.clear();
            self.state = RunState::Idle;
            log::info!("celebration drained");
        }
    }

    fn materialize(&mut self, spawn: Spawn) -> Entity {
        let (cx, cy) = spawn.origin;
        let rng = &mut self.rng;
        match spawn.kind {
            Kind::Balloon => {
                let x = cx + (rng.f64() - 0.5) * BALLOON_JITTER.0;
                let y = cy + (rng.f64() - 0.5) * BALLOON_JITTER.1;
                Entity::balloon(x, y, rng)
            }
            Kind::Petal => {
                let x = rng.f64() * self.width;
                Entity::petal(x, PETAL_ENTRY_Y, rng)
            }
            kind => Entity::spawn(kind, cx, cy, rng),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn live(&self) -> &[Entity] {
        &self.live
    }

    /// Spawns still waiting for their due time.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
