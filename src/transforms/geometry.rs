use crate::models::Image;

/// Bilinear sample at fractional source coordinates.
///
/// Writes the interpolated samples into `out` and returns true, or returns
/// false when the coordinates fall outside the source image (the canvas
/// default, zero, is kept in that case).
fn sample_bilinear(img: &Image, fx: f32, fy: f32, out: &mut [u8]) -> bool {
    let w = img.width();
    let h = img.height();
    if fx < 0.0 || fy < 0.0 || fx > (w - 1) as f32 || fy > (h - 1) as f32 {
        return false;
    }

    let x0 = fx.floor() as usize;
    let y0 = fy.floor() as usize;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let tx = fx - x0 as f32;
    let ty = fy - y0 as f32;

    let p00 = img.pixel(x0, y0);
    let p10 = img.pixel(x1, y0);
    let p01 = img.pixel(x0, y1);
    let p11 = img.pixel(x1, y1);

    for c in 0..img.channels() {
        let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
        let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
        let value = top * (1.0 - ty) + bottom * ty;
        out[c] = value.round().clamp(0.0, 255.0) as u8;
    }
    true
}

/// Rotate about the image center by `angle_degrees` (counter-clockwise),
/// with bilinear interpolation.
///
/// The output canvas is the bounding box of the rotated rectangle:
/// `new_w = |W cos| + |H sin|`, `new_h = |W sin| + |H cos|`, rounded.
/// Canvas areas with no source pixel stay at the zero (black) default.
pub fn rotate(img: &Image, angle_degrees: f32) -> Image {
    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();

    let w = img.width() as f32;
    let h = img.height() as f32;
    let new_w = (w * cos.abs() + h * sin.abs()).round() as usize;
    let new_h = (w * sin.abs() + h * cos.abs()).round() as usize;

    let mut out = Image::zeroed(new_w, new_h, img.channels());
    if img.is_empty() || out.is_empty() {
        return out;
    }

    let cx = (w - 1.0) / 2.0;
    let cy = (h - 1.0) / 2.0;
    let ncx = (new_w as f32 - 1.0) / 2.0;
    let ncy = (new_h as f32 - 1.0) / 2.0;

    let mut samples = [0u8; 3];
    for y in 0..new_h {
        for x in 0..new_w {
            // Inverse mapping: rotate the destination offset back by -theta
            let dx = x as f32 - ncx;
            let dy = y as f32 - ncy;
            let src_x = cx + dx * cos + dy * sin;
            let src_y = cy - dx * sin + dy * cos;
            if sample_bilinear(img, src_x, src_y, &mut samples[..img.channels()]) {
                out.put_pixel(x, y, &samples[..img.channels()]);
            }
        }
    }
    out
}

/// Resample to `(trunc(W * factor), trunc(H * factor))` with bilinear
/// interpolation; `factor` must be positive.
///
/// Non-integer target dimensions truncate, so small images at small
/// factors can legitimately produce a zero-size output.
pub fn scale(img: &Image, factor: f32) -> Image {
    let new_w = (img.width() as f32 * factor) as usize;
    let new_h = (img.height() as f32 * factor) as usize;

    let mut out = Image::zeroed(new_w, new_h, img.channels());
    if img.is_empty() || out.is_empty() {
        return out;
    }

    // Pixel-center alignment keeps content centered at any factor
    let inv = 1.0 / factor;
    let mut samples = [0u8; 3];
    for y in 0..new_h {
        let src_y = ((y as f32 + 0.5) * inv - 0.5).clamp(0.0, img.height() as f32 - 1.0);
        for x in 0..new_w {
            let src_x = ((x as f32 + 0.5) * inv - 0.5).clamp(0.0, img.width() as f32 - 1.0);
            if sample_bilinear(img, src_x, src_y, &mut samples[..img.channels()]) {
                out.put_pixel(x, y, &samples[..img.channels()]);
            }
        }
    }
    out
}

/// Horizontal shear `x' = x + (y - cy) * tan(angle)` about the image
/// center, canvas size unchanged.
///
/// Approximates perspective skew without a full projective correction;
/// pixels sheared in from outside the canvas stay at the zero default.
pub fn shear_x(img: &Image, skew_degrees: f32) -> Image {
    let tan = skew_degrees.to_radians().tan();
    let w = img.width();
    let h = img.height();

    let mut out = Image::zeroed(w, h, img.channels());
    if img.is_empty() {
        return out;
    }

    let cy = (h as f32 - 1.0) / 2.0;
    let mut samples = [0u8; 3];
    for y in 0..h {
        let offset = (y as f32 - cy) * tan;
        for x in 0..w {
            let src_x = x as f32 - offset;
            if sample_bilinear(img, src_x, y as f32, &mut samples[..img.channels()]) {
                out.put_pixel(x, y, &samples[..img.channels()]);
            }
        }
    }
    out
}
