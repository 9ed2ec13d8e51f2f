//! Caller-input error types
//!
//! Internal strategy failures never surface here: the pipeline absorbs them
//! and moves on to the next strategy. These errors only cover inputs the
//! caller got wrong (empty images, mismatched buffers).

use thiserror::Error;

/// Errors returned for invalid caller input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// Image has zero width or height
    #[error("image is empty ({width}x{height})")]
    EmptyImage {
        /// Width of the rejected image
        width: usize,
        /// Height of the rejected image
        height: usize,
    },

    /// Pixel buffer length does not match width * height * channels
    #[error("pixel buffer length {actual} does not match expected {expected}")]
    BufferMismatch {
        /// Length the dimensions require
        expected: usize,
        /// Length the caller supplied
        actual: usize,
    },

    /// Channel count other than 1 (luma) or 3 (RGB)
    #[error("unsupported channel count {0}, expected 1 or 3")]
    UnsupportedChannels(usize),
}
