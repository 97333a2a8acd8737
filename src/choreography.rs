//! Timed hand-over from the celebration to the video.
//!
//! The fade starts a fixed delay after the trigger whether or not the
//! celebration has finished; the video is revealed a second fixed delay
//! after the fade.

use crate::config::TransitionConfig;
use crate::timeline::Timeline;

/// Page-level actions the host applies when they come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    FadeOut,
    RevealVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Celebrating,
    FadingOut,
    Revealed,
}

pub struct Choreography {
    config: TransitionConfig,
    phase: Phase,
    cues: Timeline<Cue>,
}

impl Choreography {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            phase: Phase::Ready,
            cues: Timeline::new(),
        }
    }

    /// Arms the transition. Only the first call per page life does anything.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::Celebrating;
        self.cues.push(now + self.config.fade_delay_ms, Cue::FadeOut);
        true
    }

    pub fn poll(&mut self, now: f64) -> Vec<Cue> {
        let fired: Vec<Cue> = self.cues.due(now).collect();
        for &cue in &fired {
            match cue {
                Cue::FadeOut => {
                    self.phase = Phase::FadingOut;
                    self.cues.push(now + self.config.reveal_delay_ms, Cue::RevealVideo);
                }
                Cue::RevealVideo => self.phase = Phase::Revealed,
            }
            log::info!("transition cue {cue:?}");
        }
        fired
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
