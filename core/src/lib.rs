//! DTMF phone-number sifting for lawful-capture audio
//!
//! Detects DTMF tones in raw telephone audio with the Goertzel algorithm,
//! debounces them into a symbol stream, and keeps only sequences that parse
//! as dialable NANP numbers. Everything else in the audio (voice, in-call
//! keypad entry such as card or PIN digits) is discarded, so the output is
//! safe to hand to consumers who are only authorized to see routing data.

pub mod analyzer;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod frame;
pub mod goertzel;
pub mod nanp;
pub mod synth;

pub use analyzer::{Classification, FrameAnalyzer, ToneSet};
pub use emitter::SymbolEmitter;
pub use error::{Result, SiftError};
pub use extractor::{Extraction, Extractor};
pub use frame::FrameReader;
pub use goertzel::{dbfs, Goertzel};
pub use nanp::extract_numbers;

// Input format constants
pub const SAMPLE_RATE: usize = 8000;
pub const BITS_PER_SAMPLE: usize = 8;

/// Goertzel block size. 205 samples gives ~39 Hz bins at 8 kHz, narrow
/// enough to separate the DTMF frequencies without windowing. (105 is the
/// minimum workable value; a Hamming window is deliberately not applied
/// because the widened bins cross-talk at this block size.)
pub const FRAME_SIZE: usize = 205;

/// Duration of one analysis frame: 25.625 ms at 8 kHz.
pub const FRAME_MS: f32 = FRAME_SIZE as f32 * 1000.0 / SAMPLE_RATE as f32;

// Detection thresholds
/// A frequency counts as present when its Goertzel magnitude exceeds this.
pub const THRESH_DTMF_DBFS: f32 = 10.0;
/// Decayed-RMS level above which the frame is considered to carry voice.
pub const THRESH_VOICE_DBFS: f32 = -23.0;
/// Exponential smoothing factor for the decayed RMS voice detector.
pub const RMS_SMOOTHING: f32 = 0.1;

// Symbol emitter timing (all in milliseconds of accumulated frame time)
/// A tone must persist this long before its symbol is emitted early.
pub const MIN_DIGIT_ON_MS: f32 = 40.0;
/// Dropouts shorter than this do not end a digit.
pub const MAX_DIGIT_INTERRUPT_MS: f32 = 10.0;
/// Silence beyond this inserts a record separator.
pub const MAX_INTERDIGIT_MS: f32 = 10_000.0;
/// Voice persisting this long inserts a record separator.
pub const MIN_VOICE_ON_MS: f32 = 1000.0;

/// Record separator in the emitted symbol stream.
pub const SEPARATOR: char = '.';
