//! Fixed-size frame reader over raw signed 8-bit PCM.

use std::io::{ErrorKind, Read};

use log::debug;

use crate::error::Result;
use crate::FRAME_SIZE;

/// Consecutive zero-byte reads tolerated before the stream is declared
/// exhausted. Some pipe sources report 0 bytes without a true EOF; retrying
/// forever would spin.
const ZERO_READ_LIMIT: u32 = 3;

/// Reads the input stream in `FRAME_SIZE`-sample frames.
///
/// Short reads are retried until the frame fills or the stream ends. A
/// partial frame at end of stream is discarded and the stream terminates
/// cleanly.
pub struct FrameReader<R> {
    inner: R,
    zero_reads: u32,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            zero_reads: 0,
        }
    }

    /// Fill `frame` with the next block of samples.
    ///
    /// Returns `Ok(true)` when a full frame was read and `Ok(false)` at end
    /// of stream. Only genuine I/O failures surface as errors.
    pub fn read_frame(&mut self, frame: &mut [i8; FRAME_SIZE]) -> Result<bool> {
        let mut raw = [0u8; FRAME_SIZE];
        let mut filled = 0;

        while filled < FRAME_SIZE {
            match self.inner.read(&mut raw[filled..]) {
                Ok(0) => {
                    self.zero_reads += 1;
                    if self.zero_reads >= ZERO_READ_LIMIT {
                        break;
                    }
                }
                Ok(n) => {
                    self.zero_reads = 0;
                    filled += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        if filled < FRAME_SIZE {
            if filled > 0 {
                debug!("discarding partial frame of {filled} samples at end of stream");
            }
            return Ok(false);
        }

        for (dst, &src) in frame.iter_mut().zip(raw.iter()) {
            *dst = src as i8;
        }
        Ok(true)
    }
}
