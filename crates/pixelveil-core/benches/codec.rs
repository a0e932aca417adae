use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};

use pixelveil_core::{embed, extract};

fn carrier(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let i = (x + y) as u8;
        Rgba([i, i, i, 255])
    })
}

fn embedding(c: &mut Criterion) {
    let secret = vec![0x5a_u8; 4 * 1024];

    c.bench_function("embed 4KiB into 512x512", |b| {
        let mut image = carrier(512, 512);
        b.iter(|| {
            embed(&mut image, black_box(&secret)).expect("secret fits");
        })
    });
}

fn extraction(c: &mut Criterion) {
    let secret = vec![0x5a_u8; 4 * 1024];
    let mut image = carrier(512, 512);
    embed(&mut image, &secret).expect("secret fits");

    c.bench_function("extract 4KiB from 512x512", |b| {
        b.iter(|| {
            let extraction = extract(black_box(&image));
            assert!(extraction.is_terminated());
        })
    });
}

criterion_group!(benches, embedding, extraction);
criterion_main!(benches);
