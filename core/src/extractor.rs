//! The full sifting pipeline behind one entry point.

use std::io::Read;

use log::{debug, info};

use crate::analyzer::FrameAnalyzer;
use crate::emitter::SymbolEmitter;
use crate::error::Result;
use crate::frame::FrameReader;
use crate::nanp;
use crate::{FRAME_SIZE, SAMPLE_RATE};

/// Result of sifting one input stream.
pub struct Extraction {
    /// The debounced symbol stream, `.`-terminated unless empty.
    pub symbols: String,
    /// Validated NANP numbers in segment order, ten digits each.
    pub numbers: Vec<String>,
}

/// Drives reader, analyzer and emitter strictly serially: frame i is
/// classified and committed before frame i+1 is read, so the output is
/// fully deterministic.
pub struct Extractor {
    analyzer: FrameAnalyzer,
    emitter: SymbolEmitter,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            analyzer: FrameAnalyzer::new(),
            emitter: SymbolEmitter::new(),
        }
    }

    /// Consume the stream to completion and validate what it carried.
    pub fn run<R: Read>(mut self, reader: R) -> Result<Extraction> {
        info!("sample rate {SAMPLE_RATE} Hz, block size {FRAME_SIZE} samples");

        let mut frames = FrameReader::new(reader);
        let mut frame = [0i8; FRAME_SIZE];
        let mut index = 0usize;
        while frames.read_frame(&mut frame)? {
            let class = self.analyzer.classify(&frame);
            debug!("frame {index}: {class:?}");
            self.emitter.push(class);
            index += 1;
        }

        let symbols = self.emitter.finish();
        let numbers = nanp::extract_numbers(&symbols);
        info!(
            "{index} frames, {} symbols, {} validated numbers",
            symbols.len(),
            numbers.len()
        );
        Ok(Extraction { symbols, numbers })
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}
