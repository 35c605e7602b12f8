//! Encoder — single left-to-right pass over the input.
//!
//! Tracks one pending symbol and how many consecutive times it has been
//! seen, then flushes either a literal byte or a run descriptor whenever
//! the symbol changes, the run hits [`MAX_RUN`], or the input ends.

use crate::error::Result;
use crate::format::{descriptor, DESCRIPTOR_LEN, ESCAPE, MAX_RUN};
use serde::Serialize;
use std::io::Write;

/// Statistics from one encode pass.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EncodeStats {
    pub input_len: usize,
    pub output_len: usize,
    /// Bytes copied through unframed.
    pub literals: usize,
    /// Run descriptors emitted, degenerate count-1 forms included.
    pub descriptors: usize,
}

impl EncodeStats {
    /// Output size relative to input size (1.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 1.0;
        }
        self.output_len as f64 / self.input_len as f64
    }
}

/// Encoder state carried through the pass.
///
/// `pending` is `None` only before the first byte and immediately after a
/// flush; `count` is the number of occurrences of the pending symbol seen
/// so far, always in 1..=255 while a symbol is pending. `run_split` marks
/// a pending symbol that continues a run closed at [`MAX_RUN`], so the
/// remainder of a split run stays descriptor-framed even when only one
/// byte of it is left.
struct RunTracker {
    pending: Option<u8>,
    count: u8,
    run_split: bool,
    stats: EncodeStats,
}

impl RunTracker {
    fn new(input_len: usize) -> Self {
        Self {
            pending: None,
            count: 0,
            run_split: false,
            stats: EncodeStats {
                input_len,
                output_len: 0,
                literals: 0,
                descriptors: 0,
            },
        }
    }

    fn push<W: Write>(&mut self, byte: u8, sink: &mut W) -> Result<()> {
        match self.pending {
            None => {
                self.pending = Some(byte);
                self.count = 1;
            }
            Some(symbol) if symbol == byte => {
                if usize::from(self.count) == MAX_RUN {
                    // Count byte must not wrap: close this descriptor and
                    // continue the run under a fresh count.
                    self.flush(sink)?;
                    self.pending = Some(byte);
                    self.count = 1;
                    self.run_split = true;
                } else {
                    self.count += 1;
                }
            }
            Some(_) => {
                self.flush(sink)?;
                self.pending = Some(byte);
                self.count = 1;
            }
        }
        Ok(())
    }

    /// Emit the pending symbol, if any, and clear it.
    fn flush<W: Write>(&mut self, sink: &mut W) -> Result<()> {
        let Some(value) = self.pending.take() else {
            return Ok(());
        };
        if self.count == 1 && value != ESCAPE && !self.run_split {
            sink.write_all(&[value])?;
            self.stats.output_len += 1;
            self.stats.literals += 1;
        } else {
            // Genuine runs, the tail of a run split at MAX_RUN, and the
            // degenerate count-1 descriptor that escapes a lone 0x00.
            sink.write_all(&descriptor(self.count, value))?;
            self.stats.output_len += DESCRIPTOR_LEN;
            self.stats.descriptors += 1;
        }
        self.count = 0;
        self.run_split = false;
        Ok(())
    }

    fn finish<W: Write>(mut self, sink: &mut W) -> Result<EncodeStats> {
        self.flush(sink)?;
        Ok(self.stats)
    }
}

/// Encode `input` into `sink`.
///
/// Never fails for any byte input; the only error source is the sink
/// itself. Empty input writes nothing.
pub fn encode<W: Write>(input: &[u8], sink: &mut W) -> Result<()> {
    encode_with_stats(input, sink).map(|_| ())
}

/// Encode `input` into `sink`, reporting pass statistics.
pub fn encode_with_stats<W: Write>(input: &[u8], sink: &mut W) -> Result<EncodeStats> {
    let mut tracker = RunTracker::new(input.len());
    for &byte in input {
        tracker.push(byte, sink)?;
    }
    let stats = tracker.finish(sink)?;
    tracing::trace!(
        input_len = stats.input_len,
        output_len = stats.output_len,
        descriptors = stats.descriptors,
        "encode pass complete"
    );
    Ok(stats)
}

/// Encode into a freshly allocated buffer.
pub fn encode_to_vec(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    encode(input, &mut out).expect("Vec sink cannot fail");
    out
}
