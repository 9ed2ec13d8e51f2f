//! Decode backend contract
//!
//! The recovery pipeline does not decode symbols itself: it hands each
//! transformed image to an injected backend and inspects the outcome. Any
//! single-shot QR decoder can sit behind [`DecodeBackend`]; the only
//! capability the pipeline requires beyond plain decoding is that the
//! backend can be told which of two binarization policies to apply
//! (reference implementations of both live in
//! [`crate::utils::binarization`]).

use crate::models::Image;

/// Binarization policy a backend applies before symbol decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinarizerKind {
    /// Local-threshold binarization (integral-image mean per block)
    Adaptive,
    /// Single global threshold from the image histogram
    GlobalHistogram,
}

/// Result of a single decode attempt.
///
/// Only `Success` stops the ladder; every other variant makes the
/// controller move on to the next strategy. The controller deliberately
/// does not distinguish an almost-decode (`ChecksumInvalid`) from a miss
/// (`NotFound`) when ordering its attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Symbol located and decoded
    Success(String),
    /// No symbol found in the image
    NotFound,
    /// Symbol located but its checksum did not verify
    ChecksumInvalid,
    /// Symbol located but its format information is unreadable
    FormatInvalid,
    /// Backend-internal failure, carried as text
    Error(String),
}

impl DecodeOutcome {
    /// True only for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, DecodeOutcome::Success(_))
    }
}

/// A single-shot symbol decoder the pipeline drives.
///
/// Implementations must be deterministic for a fixed image, re-entrant,
/// and must not retain references to the passed image. Failures of any
/// kind are reported through [`DecodeOutcome`]; a panicking backend
/// violates the contract.
pub trait DecodeBackend {
    /// Attempt to decode `image` after applying the requested binarizer
    fn decode(&self, image: &Image, binarizer: BinarizerKind) -> DecodeOutcome;
}

impl<B: DecodeBackend + ?Sized> DecodeBackend for &B {
    fn decode(&self, image: &Image, binarizer: BinarizerKind) -> DecodeOutcome {
        (**self).decode(image, binarizer)
    }
}
