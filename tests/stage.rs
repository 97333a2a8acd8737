mod common;

use celebrate_wasm::choreography::{Choreography, Cue, Phase};
use celebrate_wasm::config::{CelebrationConfig, Config, TransitionConfig};
use celebrate_wasm::stage::Stage;
use common::{Op, Recorder};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn stage() -> Stage {
    Stage::new(Config::default(), 1280.0, 720.0, 77)
}

#[test]
fn trigger_fires_once_per_page() {
    let mut stage = stage();
    assert!(stage.trigger(100.0));
    let live = stage.celebration().live().len();

    assert!(!stage.trigger(200.0));
    assert_eq!(stage.celebration().live().len(), live);
    assert_eq!(stage.choreography().phase(), Phase::Celebrating);
}

#[test]
fn celebration_starts_at_the_center() {
    let mut stage = stage();
    stage.trigger(0.0);
    assert!(stage.celebration().is_running());
    assert!(stage
        .celebration()
        .live()
        .iter()
        .all(|e| e.position() == (640.0, 360.0)));
}

#[test]
fn cues_follow_the_fixed_delays() {
    let mut stage = stage();
    let (mut a, mut c) = (Recorder::default(), Recorder::default());
    stage.trigger(1000.0);

    let mut fired = Vec::new();
    let mut now = 1000.0;
    while now < 8000.0 {
        a.reset();
        c.reset();
        for cue in stage.tick(now, &mut a, &mut c) {
            fired.push((cue, now));
        }
        now += FRAME_MS;
    }

    assert_eq!(fired.len(), 2);
    let (fade, fade_at) = fired[0];
    let (reveal, reveal_at) = fired[1];
    assert_eq!(fade, Cue::FadeOut);
    assert_eq!(reveal, Cue::RevealVideo);
    assert!(fade_at >= 6000.0 && fade_at < 6000.0 + FRAME_MS);
    assert!(reveal_at >= fade_at + 800.0 && reveal_at < fade_at + 800.0 + FRAME_MS);
    assert_eq!(stage.choreography().phase(), Phase::Revealed);
}

#[test]
fn fade_does_not_wait_for_the_celebration() {
    let mut stage = stage();
    let (mut a, mut c) = (Recorder::default(), Recorder::default());
    stage.trigger(0.0);

    let cues = stage.tick(5000.0, &mut a, &mut c);

    assert_eq!(cues, vec![Cue::FadeOut]);
    assert!(stage.celebration().is_running());
    assert!(stage.celebration().pending() > 0);
}

#[test]
fn ambient_runs_before_and_after_trigger() {
    let mut stage = stage();
    let (mut a, mut c) = (Recorder::default(), Recorder::default());

    assert!(stage.tick(0.0, &mut a, &mut c).is_empty());
    assert_eq!(a.count(|op| matches!(op, Op::Circle(..))), 60);
    assert!(c.ops.is_empty());

    stage.trigger(10.0);
    a.reset();
    stage.tick(20.0, &mut a, &mut c);
    assert_eq!(a.count(|op| matches!(op, Op::Circle(..))), 60);
    assert_eq!(c.ops.first(), Some(&Op::Clear));
    assert!(c.count(|op| matches!(op, Op::Rect(..))) >= 350);
}

#[test]
fn celebration_drains_while_ambient_keeps_going() {
    let config = Config {
        celebration: CelebrationConfig {
            ribbons: 10,
            confetti: 10,
            balloons: 2,
            petals: 2,
            ..CelebrationConfig::default()
        },
        ..Config::default()
    };
    let mut stage = Stage::new(config, 800.0, 600.0, 3);
    let (mut a, mut c) = (Recorder::default(), Recorder::default());
    stage.trigger(0.0);

    let mut now = 0.0;
    while stage.celebration().is_running() {
        a.reset();
        c.reset();
        stage.tick(now, &mut a, &mut c);
        now += FRAME_MS;
        assert!(now < 60_000.0);
    }

    c.reset();
    a.reset();
    stage.tick(now, &mut a, &mut c);
    assert!(c.ops.is_empty());
    assert_eq!(a.count(|op| matches!(op, Op::Circle(..))), 60);
}

#[test]
fn resize_reaches_both_pools() {
    let mut stage = stage();
    stage.resize(400.0, 200.0);
    assert_eq!(stage.ambient().size(), (400.0, 200.0));
    assert_eq!(stage.celebration().size(), (400.0, 200.0));
    assert_eq!(stage.ambient().particles().len(), 60);

    stage.trigger(0.0);
    assert!(stage
        .celebration()
        .live()
        .iter()
        .all(|e| e.position() == (200.0, 100.0)));
}

#[test]
fn choreography_phases() {
    let mut show = Choreography::new(TransitionConfig {
        fade_delay_ms: 100.0,
        reveal_delay_ms: 10.0,
    });
    assert_eq!(show.phase(), Phase::Ready);
    assert!(show.poll(1e9).is_empty());

    assert!(show.trigger(0.0));
    assert!(!show.trigger(1.0));
    assert!(show.poll(99.0).is_empty());

    assert_eq!(show.poll(150.0), vec![Cue::FadeOut]);
    assert_eq!(show.phase(), Phase::FadingOut);
    assert!(show.poll(159.0).is_empty());

    assert_eq!(show.poll(160.0), vec![Cue::RevealVideo]);
    assert_eq!(show.phase(), Phase::Revealed);
    assert!(show.poll(1e9).is_empty());
}
