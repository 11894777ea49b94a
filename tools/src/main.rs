//! Renders the reference dialing scenarios as audio fixtures.
//!
//! Each scenario is written twice into `fixtures/`: as raw signed 8-bit
//! 8 kHz PCM (the format `dialsift` consumes) and as a 16-bit WAV copy for
//! listening. Run `cargo run -p gen-dtmf-fixtures` from the workspace root.

use std::fs;
use std::path::PathBuf;

use dialsift_core::{synth, SAMPLE_RATE};

fn scenarios() -> Vec<(&'static str, Vec<i8>)> {
    let dial = |keys: &str| synth::dial_string(keys, 100, 50).unwrap();

    let mut happy_path = dial("2025550123");
    happy_path.extend_from_slice(&synth::silence(11_000));

    let mut leading_one = dial("12025550123");
    leading_one.extend_from_slice(&synth::silence(11_000));

    let mut trailing_hash = dial("2025550123#");
    trailing_hash.extend_from_slice(&synth::silence(11_000));

    let mut voice_break = dial("202555");
    voice_break.extend_from_slice(&synth::voice_like(1200, -15.0));
    voice_break.extend_from_slice(&dial("0123"));
    voice_break.extend_from_slice(&synth::silence(2000));

    let mut bad_leading_digit = dial("0005551234");
    bad_leading_digit.extend_from_slice(&synth::silence(11_000));

    let mut two_calls = dial("2025550123");
    two_calls.extend_from_slice(&synth::silence(11_000));
    two_calls.extend_from_slice(&dial("13035550199"));

    vec![
        ("happy_path", happy_path),
        ("leading_one", leading_one),
        ("trailing_hash", trailing_hash),
        ("voice_break", voice_break),
        ("bad_leading_digit", bad_leading_digit),
        ("two_calls", two_calls),
    ]
}

fn write_wav(path: &PathBuf, samples: &[i8]) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        // Widen to 16 bits for playback tooling that dislikes 8-bit WAV.
        writer.write_sample(s as i16 * 256)?;
    }
    writer.finalize()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from("fixtures");
    fs::create_dir_all(&out_dir)?;

    for (name, samples) in scenarios() {
        let raw_path = out_dir.join(format!("{name}.s8"));
        fs::write(&raw_path, synth::to_bytes(&samples))?;

        let wav_path = out_dir.join(format!("{name}.wav"));
        write_wav(&wav_path, &samples)?;

        println!(
            "{}: {} samples ({:.2} s)",
            name,
            samples.len(),
            samples.len() as f32 / SAMPLE_RATE as f32
        );
    }

    Ok(())
}
