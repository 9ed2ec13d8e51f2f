use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_recovery::Image;
use qr_recovery::transforms::{denoise_median, enhance_contrast, rotate, scale, sharpen};
use qr_recovery::utils::binarization::{adaptive_binarize, otsu_binarize};

fn gray_image(width: usize, height: usize) -> Image {
    let data = (0..width * height).map(|i| (i % 256) as u8).collect();
    Image::from_luma8(width, height, data).unwrap()
}

fn bench_rotate_45(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("rotate_45_640x480", |b| {
        b.iter(|| rotate(black_box(&img), black_box(45.0)))
    });
}

fn bench_scale_half(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("scale_0.5_640x480", |b| {
        b.iter(|| scale(black_box(&img), black_box(0.5)))
    });
}

fn bench_scale_double(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("scale_2.0_640x480", |b| {
        b.iter(|| scale(black_box(&img), black_box(2.0)))
    });
}

fn bench_enhance_contrast(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("enhance_contrast_640x480", |b| {
        b.iter(|| enhance_contrast(black_box(&img), black_box(2.0)))
    });
}

fn bench_denoise_median(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("denoise_median_640x480", |b| {
        b.iter(|| denoise_median(black_box(&img), black_box(3)))
    });
}

fn bench_sharpen(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("sharpen_640x480", |b| b.iter(|| sharpen(black_box(&img))));
}

fn bench_adaptive_binarize(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("adaptive_binarize_640x480", |b| {
        b.iter(|| adaptive_binarize(black_box(&img), black_box(15), black_box(10)))
    });
}

fn bench_otsu_binarize(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("otsu_binarize_640x480", |b| {
        b.iter(|| otsu_binarize(black_box(&img)))
    });
}

criterion_group!(
    benches,
    bench_rotate_45,
    bench_scale_half,
    bench_scale_double,
    bench_enhance_contrast,
    bench_denoise_median,
    bench_sharpen,
    bench_adaptive_binarize,
    bench_otsu_binarize
);
criterion_main!(benches);
