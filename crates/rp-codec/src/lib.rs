//! Runpress codec — escape-coded byte run-length encoding.
//!
//! Compresses a byte stream by replacing runs of a repeated byte with a
//! three-byte descriptor, and expands it back losslessly:
//!
//! ```text
//!  Literal byte b (b != 0x00)      ->  b
//!  Literal 0x00                    ->  0x00 0x01 0x00
//!  Run of n bytes v (2 <= n <= 255) ->  0x00 n v
//! ```
//!
//! Runs longer than 255 split into consecutive descriptors. There is no
//! header or versioning; the stream is self-describing through the escape
//! byte alone, so arbitrary binary input (including input full of escape
//! bytes) round-trips exactly.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;

pub use decoder::{decode, decode_to_vec};
pub use encoder::{encode, encode_to_vec, encode_with_stats, EncodeStats};
pub use error::{CodecError, Result};
