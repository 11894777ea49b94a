//! Per-frame DTMF tone and voice classification.
//!
//! For each frame the analyzer measures the eight DTMF frequencies and
//! their first harmonics with the Goertzel algorithm, collects the
//! above-threshold fundamentals into a bitset, and rejects any entry whose
//! first harmonic is also hot: a real keypad tone is machine-pure, while
//! speech that wanders onto a DTMF frequency carries harmonics. The
//! surviving bitset is a tone only when exactly one row and one column
//! frequency remain.

use log::trace;

use crate::goertzel::{dbfs, Goertzel};
use crate::{FRAME_SIZE, RMS_SMOOTHING, THRESH_DTMF_DBFS, THRESH_VOICE_DBFS};

/// Row (low-group) frequencies of the DTMF keypad.
pub const DTMF_LOW_FREQS: [f32; 4] = [697.0, 770.0, 852.0, 941.0];

/// Column (high-group) frequencies of the DTMF keypad.
pub const DTMF_HIGH_FREQS: [f32; 4] = [1209.0, 1336.0, 1477.0, 1633.0];

/// Canonical keypad layout, rows by low frequency, columns by high.
pub const DTMF_KEYS: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Frequency for detector index 0..7 (0..3 low group, 4..7 high group).
fn frequency(idx: usize) -> f32 {
    if idx < 4 {
        DTMF_LOW_FREQS[idx]
    } else {
        DTMF_HIGH_FREQS[idx - 4]
    }
}

/// Bitset over the eight DTMF frequency indices.
///
/// Bits 0..3 are the low group, bits 4..7 the high group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToneSet(u8);

impl ToneSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < 8);
        self.0 |= 1 << idx;
    }

    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < 8);
        self.0 &= !(1 << idx);
    }

    pub fn contains(&self, idx: usize) -> bool {
        debug_assert!(idx < 8);
        self.0 & (1 << idx) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Map to a keypad character, if the set is a valid DTMF state:
    /// exactly one low and exactly one high frequency present.
    pub fn to_key(&self) -> Option<char> {
        let low = self.0 & 0x0F;
        let high = self.0 >> 4;
        if low.count_ones() == 1 && high.count_ones() == 1 {
            let row = low.trailing_zeros() as usize;
            let col = high.trailing_zeros() as usize;
            Some(DTMF_KEYS[row][col])
        } else {
            None
        }
    }
}

/// What one frame of audio contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A validated DTMF tone for one keypad character.
    Tone(char),
    /// No valid tone, but the decayed RMS says someone is talking.
    Voice,
    /// Neither.
    Silence,
}

/// Stateless per-frame tone detection plus a decayed-RMS voice detector.
///
/// The Goertzel coefficients are fixed at construction; the only state
/// carried across frames is the smoothed RMS estimate.
pub struct FrameAnalyzer {
    fundamentals: [Goertzel; 8],
    harmonics: [Goertzel; 8],
    rms_avg: f32,
}

impl FrameAnalyzer {
    pub fn new() -> Self {
        Self {
            fundamentals: std::array::from_fn(|i| Goertzel::for_freq(frequency(i))),
            harmonics: std::array::from_fn(|i| Goertzel::for_freq(2.0 * frequency(i))),
            rms_avg: 0.0,
        }
    }

    /// Classify one frame. Voice and tone are mutually exclusive: a
    /// validated tone pair wins, and harmonic rejection keeps voiced
    /// segments out of the tone branch.
    pub fn classify(&mut self, frame: &[i8; FRAME_SIZE]) -> Classification {
        let mut tones = ToneSet::empty();
        for (i, filter) in self.fundamentals.iter().enumerate() {
            let level = dbfs(filter.magnitude(frame));
            trace!("{:6.1} Hz: {:6.1} dBFS", frequency(i), level);
            if level > THRESH_DTMF_DBFS {
                tones.set(i);
            }
        }

        // Harmonic rejection: a hot first harmonic means speech, not a key.
        for i in 0..8 {
            if tones.contains(i) {
                let level = dbfs(self.harmonics[i].magnitude(frame));
                if level > THRESH_DTMF_DBFS {
                    trace!(
                        "{:6.1} Hz rejected, first harmonic at {:6.1} dBFS",
                        frequency(i),
                        level
                    );
                    tones.clear(i);
                }
            }
        }

        let rms = frame_rms(frame);
        self.rms_avg = RMS_SMOOTHING * rms + (1.0 - RMS_SMOOTHING) * self.rms_avg;

        if let Some(key) = tones.to_key() {
            Classification::Tone(key)
        } else if dbfs(self.rms_avg) > THRESH_VOICE_DBFS {
            Classification::Voice
        } else {
            Classification::Silence
        }
    }
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn frame_rms(frame: &[i8; FRAME_SIZE]) -> f32 {
    let sum_sq: f32 = frame.iter().map(|&s| (s as f32) * (s as f32)).sum();
    (sum_sq / FRAME_SIZE as f32).sqrt()
}
