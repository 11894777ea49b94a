//! Temporal debouncing of frame classifications into a symbol stream.
//!
//! A threshold detector fires on every consecutive frame of a held key, so
//! raw classifications cannot be appended directly. The emitter tracks one
//! detection episode at a time and the `emitted` gate guarantees each
//! episode contributes at most one symbol; only `reset` reopens the gate.

use log::debug;

use crate::analyzer::Classification;
use crate::{
    FRAME_MS, MAX_DIGIT_INTERRUPT_MS, MAX_INTERDIGIT_MS, MIN_DIGIT_ON_MS, MIN_VOICE_ON_MS,
    SEPARATOR,
};

/// Stateful debouncer/timer over the classification stream.
///
/// Time advances by the frame duration per consumed classification; all
/// thresholds are measured in accumulated frame time, not wall clock.
pub struct SymbolEmitter {
    on_char: Option<char>,
    on_time_ms: f32,
    off_time_ms: f32,
    voice_time_ms: f32,
    emitted: bool,
    buffer: String,
}

impl SymbolEmitter {
    pub fn new() -> Self {
        Self {
            on_char: None,
            on_time_ms: 0.0,
            off_time_ms: 0.0,
            voice_time_ms: 0.0,
            emitted: false,
            buffer: String::with_capacity(100),
        }
    }

    /// Consume one frame classification, in frame order.
    pub fn push(&mut self, class: Classification) {
        match class {
            Classification::Tone(c) => self.tone_frame(c),
            Classification::Voice => {
                self.voice_time_ms += FRAME_MS;
                if self.voice_time_ms > MIN_VOICE_ON_MS {
                    self.emit(SEPARATOR);
                }
                self.off_frame();
            }
            Classification::Silence => self.off_frame(),
        }
    }

    /// Symbols accumulated so far.
    pub fn symbols(&self) -> &str {
        &self.buffer
    }

    /// Terminate the stream: any pending episode is dropped and the buffer
    /// is closed with a separator so the validator always sees a
    /// `.`-terminated run.
    pub fn finish(mut self) -> String {
        self.reset();
        self.emit(SEPARATOR);
        self.buffer
    }

    fn tone_frame(&mut self, c: char) {
        // A fresh episode: clear all residue from the previous one,
        // including the emission gate, or a digit following a timeout
        // separator could never be committed.
        if self.on_time_ms == 0.0 {
            self.reset();
        }
        if let Some(prev) = self.on_char {
            if prev != c {
                self.emit(prev);
                self.reset();
            }
        }
        self.on_char = Some(c);
        self.on_time_ms += FRAME_MS;
        if self.on_time_ms > MIN_DIGIT_ON_MS {
            self.emit(c);
        }
    }

    fn off_frame(&mut self) {
        self.off_time_ms += FRAME_MS;
        if let Some(c) = self.on_char {
            if self.off_time_ms > MAX_DIGIT_INTERRUPT_MS {
                self.emit(c);
                self.reset();
            }
        }
        if self.off_time_ms > MAX_INTERDIGIT_MS {
            self.emit(SEPARATOR);
        }
    }

    /// Append a symbol, at most once per detection episode.
    ///
    /// Separators additionally collapse: a run never starts with one and
    /// never contains two back to back.
    fn emit(&mut self, sym: char) {
        if self.emitted {
            return;
        }
        if sym == SEPARATOR && (self.buffer.is_empty() || self.buffer.ends_with(SEPARATOR)) {
            self.emitted = true;
            return;
        }
        self.buffer.push(sym);
        self.emitted = true;
        debug!("emit '{sym}' (symbol stream now {} long)", self.buffer.len());
    }

    fn reset(&mut self) {
        self.on_char = None;
        self.on_time_ms = 0.0;
        self.off_time_ms = 0.0;
        self.voice_time_ms = 0.0;
        self.emitted = false;
    }
}

impl Default for SymbolEmitter {
    fn default() -> Self {
        Self::new()
    }
}
