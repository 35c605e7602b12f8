use thiserror::Error;

/// Errors raised by the codec.
///
/// Encoding never fails on its own; every variant except `Sink` comes from
/// decoding malformed input. Malformed framing terminates the call
/// immediately, since continuing would desynchronize all later output.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("corrupt data: run count of zero at offset {offset}")]
    ZeroRunCount { offset: usize },
    #[error("corrupt data: stream ends mid-descriptor at offset {offset}, expecting {expecting}")]
    TruncatedDescriptor {
        offset: usize,
        expecting: &'static str,
    },
    #[error("output sink error: {0}")]
    Sink(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
