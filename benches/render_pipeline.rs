// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use derma_lens::domain::{AcneRegion, AcneType};
use derma_lens::media::image::decode_image;
use derma_lens::render::pipeline::{LoadRequest, RenderPipeline};
use derma_lens::ui::state::ViewportTransform;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;
use std::sync::Arc;

fn annotated_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pipeline");

    let image = RgbaImage::from_pixel(512, 512, Rgba([120, 110, 100, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode fixture");
    let decoded = Arc::new(decode_image(&bytes).expect("decode fixture"));

    let regions: Vec<AcneRegion> = (0..20)
        .map(|i| AcneRegion {
            id: format!("r{i}"),
            x: (i % 5) as f32 * 90.0 + 10.0,
            y: (i / 5) as f32 * 90.0 + 10.0,
            width: 60.0,
            height: 60.0,
            confidence: 0.5 + (i as f32) * 0.02,
            kind: match i % 6 {
                0 => AcneType::Papule,
                1 => AcneType::Pustule,
                2 => AcneType::Blackhead,
                3 => AcneType::Whitehead,
                4 => AcneType::Nodule,
                _ => AcneType::Cyst,
            },
        })
        .collect();

    let mut pipeline = RenderPipeline::new();
    let LoadRequest::Fetch { generation } = pipeline.begin_load("bench.png") else {
        panic!("first load must fetch");
    };
    assert!(pipeline.complete_load(generation, "bench.png", Ok(decoded)));

    let mut viewport = ViewportTransform::default();
    viewport.zoom_in();

    group.bench_function("draw_cycle_512_with_20_regions", |b| {
        b.iter(|| {
            black_box(pipeline.render(&viewport, &regions, true));
        });
    });

    group.bench_function("draw_cycle_512_without_overlay", |b| {
        b.iter(|| {
            black_box(pipeline.render(&viewport, &regions, false));
        });
    });

    group.finish();
}

criterion_group!(benches, annotated_frame_benchmark);
criterion_main!(benches);
