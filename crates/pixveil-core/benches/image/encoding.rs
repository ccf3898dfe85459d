use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use pixveil_core::media::payload::ContentKind;
use pixveil_core::LsbCodec;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image =
            RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let secret = vec![0x5A; 4096];

        b.iter(|| {
            LsbCodec::embed(&plain_image, &secret, ContentKind::File)
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
