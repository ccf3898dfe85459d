use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use pixveil_core::media::payload::ContentKind;
use pixveil_core::LsbCodec;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let cover = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let secret = vec![0x5A; 4096];
        let img = LsbCodec::embed(&cover, &secret, ContentKind::File)
            .expect("Cannot hide secret in cover");

        b.iter(|| {
            LsbCodec::extract(&img).expect("Failed to unveil the secret");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
