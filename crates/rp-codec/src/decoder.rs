//! Decoder — expands escape-coded runs back into the original bytes.
//!
//! Runs a three-state machine over the encoded stream. The machine is only
//! allowed to finish in [`DecodeState::Literal`]; ending mid-descriptor
//! means the stream was cut short and is reported as corruption rather
//! than silently dropped.

use crate::error::{CodecError, Result};
use crate::format::{ESCAPE, MAX_RUN};
use std::io::Write;

/// Decoder state, one variant per position inside a run descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Outside any descriptor; non-escape bytes copy straight through.
    Literal,
    /// The previous byte was the escape symbol; the next is the run count.
    ReadingCount,
    /// Count is known; the next byte is the value to repeat.
    ReadingValue { count: u8 },
}

/// Decode `input` into `sink`, returning the number of decoded bytes
/// written.
///
/// # Errors
///
/// Returns [`CodecError::ZeroRunCount`] if a descriptor carries a count of
/// zero (the encoder never emits one, so it can only mean corruption), and
/// [`CodecError::TruncatedDescriptor`] if the stream ends between an
/// escape byte and the end of its descriptor.
pub fn decode<W: Write>(input: &[u8], sink: &mut W) -> Result<usize> {
    let mut state = DecodeState::Literal;
    let mut decoded = 0usize;
    let mut run_buf = [0u8; MAX_RUN];

    for (offset, &byte) in input.iter().enumerate() {
        state = match state {
            DecodeState::Literal => {
                if byte == ESCAPE {
                    DecodeState::ReadingCount
                } else {
                    sink.write_all(&[byte])?;
                    decoded += 1;
                    DecodeState::Literal
                }
            }
            DecodeState::ReadingCount => {
                if byte == 0 {
                    return Err(CodecError::ZeroRunCount { offset });
                }
                DecodeState::ReadingValue { count: byte }
            }
            DecodeState::ReadingValue { count } => {
                let n = usize::from(count);
                run_buf[..n].fill(byte);
                sink.write_all(&run_buf[..n])?;
                decoded += n;
                DecodeState::Literal
            }
        };
    }

    match state {
        DecodeState::Literal => {
            tracing::trace!(input_len = input.len(), decoded, "decode pass complete");
            Ok(decoded)
        }
        DecodeState::ReadingCount => Err(CodecError::TruncatedDescriptor {
            offset: input.len(),
            expecting: "run count",
        }),
        DecodeState::ReadingValue { .. } => Err(CodecError::TruncatedDescriptor {
            offset: input.len(),
            expecting: "run value",
        }),
    }
}

/// Decode into a freshly allocated buffer.
pub fn decode_to_vec(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    decode(input, &mut out)?;
    Ok(out)
}
