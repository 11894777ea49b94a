//! Signed 8-bit test-signal synthesis.
//!
//! Renders DTMF keys, dialing cadences, and voice-like program material in
//! the exact input format the detector consumes. Used by the unit and
//! scenario tests and by the fixture generator.

use std::f32::consts::PI;

use crate::analyzer::{DTMF_HIGH_FREQS, DTMF_KEYS, DTMF_LOW_FREQS};
use crate::error::{Result, SiftError};
use crate::goertzel::DBFS_REFERENCE;
use crate::SAMPLE_RATE;

/// Per-tone amplitude: 0.35 of full scale, so the dual-tone sum keeps
/// headroom below the 8-bit rails.
const TONE_AMPLITUDE: f32 = 0.35 * 127.0;

/// The (low, high) frequency pair for a keypad character.
pub fn key_frequencies(key: char) -> Option<(f32, f32)> {
    for (row, keys) in DTMF_KEYS.iter().enumerate() {
        for (col, &k) in keys.iter().enumerate() {
            if k == key {
                return Some((DTMF_LOW_FREQS[row], DTMF_HIGH_FREQS[col]));
            }
        }
    }
    None
}

fn num_samples(duration_ms: u32) -> usize {
    duration_ms as usize * SAMPLE_RATE / 1000
}

fn render(duration_ms: u32, components: &[(f32, f32)]) -> Vec<i8> {
    let count = num_samples(duration_ms);
    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / SAMPLE_RATE as f32;
        let sum: f32 = components
            .iter()
            .map(|&(freq, amplitude)| amplitude * (2.0 * PI * freq * t).sin())
            .sum();
        samples.push(sum.round().clamp(-127.0, 127.0) as i8);
    }
    samples
}

/// A pure dual-tone burst for one keypad character.
pub fn dtmf_tone(key: char, duration_ms: u32) -> Result<Vec<i8>> {
    let (low, high) = key_frequencies(key).ok_or(SiftError::InvalidSymbol(key))?;
    Ok(render(
        duration_ms,
        &[(low, TONE_AMPLITUDE), (high, TONE_AMPLITUDE)],
    ))
}

/// A dual-tone burst with its first harmonics mixed in at
/// `harmonic_scale` of the fundamental amplitude.
///
/// No real keypad produces this; it models speech energy that happens to
/// sit on a DTMF pair, which the detector must reject.
pub fn dtmf_tone_with_harmonics(
    key: char,
    duration_ms: u32,
    harmonic_scale: f32,
) -> Result<Vec<i8>> {
    let (low, high) = key_frequencies(key).ok_or(SiftError::InvalidSymbol(key))?;
    let harmonic = harmonic_scale * TONE_AMPLITUDE;
    Ok(render(
        duration_ms,
        &[
            (low, TONE_AMPLITUDE),
            (high, TONE_AMPLITUDE),
            (2.0 * low, harmonic),
            (2.0 * high, harmonic),
        ],
    ))
}

/// Pure silence.
pub fn silence(duration_ms: u32) -> Vec<i8> {
    vec![0; num_samples(duration_ms)]
}

/// A harmonic-rich non-DTMF mixture at roughly `level_dbfs` RMS.
///
/// The component frequencies sit between the DTMF bins so none of them
/// registers as a tone; the energy still drives the voice detector.
pub fn voice_like(duration_ms: u32, level_dbfs: f32) -> Vec<i8> {
    const VOICE_FREQS: [f32; 4] = [311.0, 554.0, 622.0, 1108.0];
    let target_rms = DBFS_REFERENCE * 10f32.powf(level_dbfs / 20.0);
    // RMS of an n-component sum at equal amplitude a is a*sqrt(n/2).
    let amplitude = target_rms / (VOICE_FREQS.len() as f32 / 2.0).sqrt();
    let components: Vec<(f32, f32)> = VOICE_FREQS.iter().map(|&f| (f, amplitude)).collect();
    render(duration_ms, &components)
}

/// Render a dial string as tone bursts separated by silence.
pub fn dial_string(keys: &str, on_ms: u32, off_ms: u32) -> Result<Vec<i8>> {
    let mut samples = Vec::new();
    for key in keys.chars() {
        samples.extend_from_slice(&dtmf_tone(key, on_ms)?);
        samples.extend_from_slice(&silence(off_ms));
    }
    Ok(samples)
}

/// Reinterpret signed samples as the raw byte stream the reader consumes.
pub fn to_bytes(samples: &[i8]) -> Vec<u8> {
    samples.iter().map(|&s| s as u8).collect()
}
