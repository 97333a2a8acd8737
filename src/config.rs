//! Tunables for the ambient field, the celebration waves and the page
//! transition. `Default` reproduces the look of the inauguration page.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub ambient: AmbientConfig,
    pub celebration: CelebrationConfig,
    pub transition: TransitionConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientConfig {
    /// Number of drifting particles; the pool is rebuilt at this size on every resize.
    pub count: usize,
    /// Pairs closer than this (in pixels) are joined by a line.
    pub link_distance: f64,
    /// Line alpha for two coincident particles; falls off linearly to 0 at `link_distance`.
    pub link_alpha: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            count: 60,
            link_distance: 100.0,
            link_alpha: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationConfig {
    pub ribbons: usize,
    pub confetti: usize,
    pub balloons: usize,
    pub balloon_interval_ms: f64,
    pub petals: usize,
    pub petal_interval_ms: f64,
    /// Entities falling this far below the bottom edge are dropped.
    pub bottom_margin: f64,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            ribbons: 200,
            confetti: 150,
            balloons: 150,
            balloon_interval_ms: 50.0,
            petals: 2000,
            petal_interval_ms: 80.0,
            bottom_margin: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    /// Delay between the trigger and the main content fade.
    pub fade_delay_ms: f64,
    /// Delay between the fade and the video reveal.
    pub reveal_delay_ms: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            fade_delay_ms: 5000.0,
            reveal_delay_ms: 800.0,
        }
    }
}
