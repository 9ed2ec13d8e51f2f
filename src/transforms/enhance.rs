use crate::models::Image;

/// Linear contrast stretch about mid-gray.
///
/// Every sample is remapped as `clamp((v - 128) * factor + 128, 0, 255)`,
/// applied per channel. A factor above 1.0 increases contrast, a factor in
/// (0, 1) flattens it, and 1.0 is the identity.
pub fn enhance_contrast(img: &Image, factor: f32) -> Image {
    let mut out = img.clone();
    for v in out.as_raw_mut() {
        *v = ((*v as f32 - 128.0) * factor + 128.0).round().clamp(0.0, 255.0) as u8;
    }
    out
}
