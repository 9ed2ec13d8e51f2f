//! qr_recovery - fallback-ladder recovery for damaged QR code images
//!
//! Photographs of matrix codes are often rotated, skewed, blurry, noisy,
//! or low-contrast, and a single direct decode attempt fails. This crate
//! wraps any single-shot decoder (the [`backend::DecodeBackend`] trait)
//! in a bounded, ordered ladder of image-recovery strategies (contrast
//! enhancement, alternate binarization, rotation/scale/skew sweeps,
//! denoising), stopping at the first success and reporting which strategy
//! worked, at what confidence, and at what cost.
//!
//! A separate [`damage`] module scores how damaged an image looks
//! (finder-pattern presence, contrast, noise) so callers can explain a
//! failed recovery to users.
//!
//! ```
//! use qr_recovery::{BinarizerKind, DecodeBackend, DecodeOutcome, Image, RecoveryPipeline};
//!
//! struct MyDecoder;
//!
//! impl DecodeBackend for MyDecoder {
//!     fn decode(&self, _image: &Image, _binarizer: BinarizerKind) -> DecodeOutcome {
//!         DecodeOutcome::NotFound // plug a real decoder in here
//!     }
//! }
//!
//! let pipeline = RecoveryPipeline::new(MyDecoder);
//! let image = Image::from_luma8(32, 32, vec![200u8; 1024]).unwrap();
//! let result = pipeline.recover(&image).unwrap();
//! assert!(!result.is_recovered());
//! assert_eq!(result.attempts_used, 7);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Decode backend contract (trait, binarizer kinds, decode outcomes)
pub mod backend;
/// Damage assessment (finder heuristic, contrast, noise, severity)
pub mod damage;
/// Caller-input error types
pub mod error;
/// Core data structures (Image, BitMatrix, results, reports)
pub mod models;
/// The ordered fallback-strategy controller
pub mod pipeline;
/// Pure image transforms (rotate, scale, shear, contrast, filters)
pub mod transforms;
/// Binarization helpers for backend implementers
pub mod utils;

pub use backend::{BinarizerKind, DecodeBackend, DecodeOutcome};
pub use damage::{PixelSampler, XorShiftSampler, assess, assess_with_sampler};
pub use error::RecoveryError;
pub use models::{BitMatrix, DamageLevel, DamageReport, Image, RecoveryResult};
pub use pipeline::{RecoveryPipeline, Strategy};
