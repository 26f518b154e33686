//! Error types.
//!
//! Errors only arise while constructing inputs: an out-of-range outline
//! configuration or a byte buffer that cannot hold the described pixels.
//! Rendering itself never fails; cancellation is reported as a status.

use thiserror::Error;

/// Result type alias for fallible construction.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Errors produced when building an outline configuration or output buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutlineError {
    #[error("dash offset {0} is outside 0..=16")]
    DashOffsetOutOfRange(u32),

    #[error("dash segment length {0} is outside 1..=4")]
    DashLengthOutOfRange(u32),

    #[error("dash segment gap {0} is outside 1..=4")]
    DashGapOutOfRange(u32),

    #[error("packed color {0:#x} does not fit in 0xRRGGBB")]
    ColorOutOfRange(u32),

    #[error("buffer too small: need {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("stride {stride} cannot hold a row of {width} pixels")]
    InvalidStride { stride: i32, width: u32 },

    #[error("pixel format needs {expected} bytes per pixel, buffer was laid out for {actual}")]
    PixelSizeMismatch { expected: u32, actual: u32 },
}
