use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioNode, GainNode, OscillatorType};

use crate::chime::{Chime, Envelope, Waveform};

/// Play `chime` once. Blocked or missing audio is logged and ignored.
pub fn play(chime: &Chime) {
    if let Err(e) = try_play(chime) {
        log::info!("audio not supported or blocked: {e:?}");
    }
}

fn try_play(chime: &Chime) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let now = ctx.current_time();

    let chord = envelope(&ctx, &chime.envelope, now)?;
    for tone in &chime.tones {
        let osc = ctx.create_oscillator()?;
        osc.set_type(match tone.waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Triangle => OscillatorType::Triangle,
        });
        osc.frequency().set_value(tone.frequency);
        osc.connect_with_audio_node(&chord)?;
        osc.start_with_when(now + tone.onset)?;
        osc.stop_with_when(now + tone.stop)?;
    }

    let sweep = &chime.sparkle;
    let sparkle = envelope(&ctx, &sweep.envelope, now)?;
    let osc = ctx.create_oscillator()?;
    osc.frequency().set_value_at_time(sweep.from, now)?;
    osc.frequency()
        .exponential_ramp_to_value_at_time(sweep.to, now + sweep.duration)?;
    osc.connect_with_audio_node(&sparkle)?;
    osc.start_with_when(now)?;
    osc.stop_with_when(now + sweep.duration)?;

    Ok(())
}

/// Gain node wired to the destination, ramping down per `env`.
fn envelope(ctx: &AudioContext, env: &Envelope, now: f64) -> Result<GainNode, JsValue> {
    let gain = ctx.create_gain()?;
    let destination: &AudioNode = &ctx.destination();
    gain.connect_with_audio_node(destination)?;
    gain.gain().set_value_at_time(env.peak, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(env.floor, now + env.release)?;
    Ok(gain)
}
