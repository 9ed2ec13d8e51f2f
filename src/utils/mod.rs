//! Image-processing helpers for backend implementers
//!
//! The pipeline never binarizes on its own; that is the decode backend's
//! job, selected per strategy via
//! [`BinarizerKind`](crate::backend::BinarizerKind). This module supplies
//! reference implementations of the two policies the kinds name, so a
//! backend does not have to bring its own.

pub mod binarization;
