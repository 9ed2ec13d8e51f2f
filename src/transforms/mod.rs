//! Pure image transforms used by the recovery ladder
//!
//! Every function here takes an [`Image`](crate::models::Image) by
//! reference and returns a new owned image; inputs are never mutated and
//! nothing panics for positive-size inputs. Degenerate zero-size outputs
//! are possible (e.g. scaling a tiny image far down) and are the caller's
//! problem; the pipeline checks for them before decoding.
//!
//! - Geometry: rotation, scaling, horizontal shear (bilinear resampling)
//! - Enhancement: linear contrast stretch about mid-gray
//! - Filtering: median denoise, fixed 3x3 sharpen kernel

/// Linear contrast stretch
pub mod enhance;
/// Median denoise and sharpen convolution
pub mod filter;
/// Rotation, scaling and shear with bilinear resampling
pub mod geometry;

pub use enhance::enhance_contrast;
pub use filter::{denoise_median, sharpen};
pub use geometry::{rotate, scale, shear_x};
