//! The celebratory sound, described as data for a tone synthesizer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// Gain ramp from `peak` down to `floor` over `release` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub peak: f32,
    pub floor: f32,
    pub release: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub waveform: Waveform,
    /// Seconds after the chime starts.
    pub onset: f64,
    pub stop: f64,
}

/// Exponential pitch glide with its own envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub from: f32,
    pub to: f32,
    pub duration: f64,
    pub envelope: Envelope,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chime {
    pub tones: Vec<Tone>,
    pub envelope: Envelope,
    pub sparkle: Sweep,
}

const C_MAJOR: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
const STAGGER: f64 = 0.05;
const RING: f64 = 2.0;

/// C-major chord with a rising sparkle on top.
pub fn fanfare() -> Chime {
    let tones = C_MAJOR
        .iter()
        .enumerate()
        .map(|(i, &frequency)| Tone {
            frequency,
            waveform: if i == 0 { Waveform::Sine } else { Waveform::Triangle },
            onset: i as f64 * STAGGER,
            stop: RING,
        })
        .collect();

    Chime {
        tones,
        envelope: Envelope {
            peak: 0.3,
            floor: 0.01,
            release: RING,
        },
        sparkle: Sweep {
            from: 2000.0,
            to: 4000.0,
            duration: 0.5,
            envelope: Envelope {
                peak: 0.1,
                floor: 0.01,
                release: 0.5,
            },
        },
    }
}
