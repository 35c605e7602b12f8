//! Shared wire-format constants and helpers.

/// Reserved byte that introduces a run descriptor.
pub const ESCAPE: u8 = 0x00;

/// Longest run a single descriptor can carry (the count is one byte).
pub const MAX_RUN: usize = 255;

/// Size of an encoded run descriptor: escape, count, value.
pub const DESCRIPTOR_LEN: usize = 3;

/// Build the descriptor for `count` repetitions of `value`.
///
/// `count == 1` is the degenerate form used to escape a literal `ESCAPE`
/// byte; genuine runs use counts 2..=255. A count of 0 is never emitted —
/// the decoder rejects it as corruption.
#[must_use]
pub fn descriptor(count: u8, value: u8) -> [u8; DESCRIPTOR_LEN] {
    debug_assert!(count >= 1);
    [ESCAPE, count, value]
}

/// Upper bound on encoded size for an input of `input_len` bytes.
///
/// Worst case is an input of nothing but escape bytes, each of which
/// expands into a full descriptor.
#[must_use]
pub fn max_encoded_len(input_len: usize) -> usize {
    input_len * DESCRIPTOR_LEN
}
