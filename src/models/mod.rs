pub mod image;
pub mod matrix;
pub mod report;
pub mod result;

pub use image::Image;
pub use matrix::BitMatrix;
pub use report::{DamageLevel, DamageReport};
pub use result::RecoveryResult;
