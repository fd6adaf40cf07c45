use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use enclosure_art::artwork::{Artwork, compose};
use enclosure_art::config::{Config, VentRing};
use enclosure_art::geometry::describe_arc;
use enclosure_art::render::render_svg;
use std::hint::black_box;

/// Vent layout with `spokes` spokes and `rings` rings of airflow arcs.
fn dense_vent_config(spokes: usize, rings: usize) -> Config {
    let mut config = Config::default();
    config.vent.spokes = spokes;
    config.vent.rings = (0..rings)
        .map(|idx| VentRing {
            radius: 4.0 + 2.0 * idx as f64,
            half_sweep_deg: None,
        })
        .collect();
    config
}

fn bench_describe_arc(c: &mut Criterion) {
    c.bench_function("describe_arc", |b| {
        b.iter(|| {
            let d = describe_arc(
                black_box(82.0),
                black_box(75.0),
                black_box(13.0),
                black_box(-13.8),
                black_box(13.8),
            );
            black_box(d.len());
        });
    });
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let config = Config::default();
    for artwork in Artwork::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(artwork.name()),
            &artwork,
            |b, &data| {
                b.iter(|| {
                    let doc = compose(black_box(data), &config);
                    black_box(doc.body.len());
                });
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let config = Config::default();
    for artwork in Artwork::ALL {
        let doc = compose(artwork, &config);
        group.bench_with_input(BenchmarkId::from_parameter(artwork.name()), &doc, |b, data| {
            b.iter(|| {
                let svg = render_svg(black_box(data));
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end_vent");
    for (spokes, rings) in [(8, 3), (24, 6), (72, 12)] {
        let config = dense_vent_config(spokes, rings);
        let label = format!("{spokes}x{rings}");
        group.bench_with_input(BenchmarkId::from_parameter(label), &config, |b, data| {
            b.iter(|| {
                let svg = render_svg(&compose(Artwork::Vent, black_box(data)));
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_describe_arc, bench_compose, bench_render, bench_end_to_end
);
criterion_main!(benches);
