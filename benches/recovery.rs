use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_recovery::{
    BinarizerKind, DecodeBackend, DecodeOutcome, Image, RecoveryPipeline, assess,
};

/// Worst-case backend: every tier runs to exhaustion
struct NeverDecodes;

impl DecodeBackend for NeverDecodes {
    fn decode(&self, _image: &Image, _binarizer: BinarizerKind) -> DecodeOutcome {
        DecodeOutcome::NotFound
    }
}

fn gray_image(width: usize, height: usize) -> Image {
    let data = (0..width * height).map(|i| (i % 256) as u8).collect();
    Image::from_luma8(width, height, data).unwrap()
}

fn bench_recover_exhaustion_small(c: &mut Criterion) {
    let pipeline = RecoveryPipeline::new(NeverDecodes);
    let img = gray_image(100, 100);
    c.bench_function("recover_exhaustion_100x100", |b| {
        b.iter(|| pipeline.recover(black_box(&img)))
    });
}

fn bench_recover_exhaustion_medium(c: &mut Criterion) {
    let pipeline = RecoveryPipeline::new(NeverDecodes);
    let img = gray_image(640, 480);
    c.bench_function("recover_exhaustion_640x480", |b| {
        b.iter(|| pipeline.recover(black_box(&img)))
    });
}

fn bench_assess_medium(c: &mut Criterion) {
    let img = gray_image(640, 480);
    c.bench_function("assess_640x480", |b| b.iter(|| assess(black_box(&img))));
}

fn bench_assess_large(c: &mut Criterion) {
    let img = gray_image(1920, 1080);
    c.bench_function("assess_1920x1080", |b| b.iter(|| assess(black_box(&img))));
}

criterion_group!(
    benches,
    bench_recover_exhaustion_small,
    bench_recover_exhaustion_medium,
    bench_assess_medium,
    bench_assess_large
);
criterion_main!(benches);
