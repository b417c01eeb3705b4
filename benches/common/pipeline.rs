use criterion::{black_box, Criterion};
use splinetrail::{fit, CurveSampler, DrawRange, RibbonBuilder};
use crate::common::samples::{CURVES, POINTS, STROKE};

pub fn fitting(c: &mut Criterion) {
    c.bench_function("fit short", |b| b.iter(|| black_box(fit(&POINTS))));
    c.bench_function("fit long", |b| b.iter(|| black_box(fit(&STROKE))));
}

pub fn sampling(c: &mut Criterion) {
    let sampler = CurveSampler::default();
    c.bench_function("sub_interval", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(sampler.sub_interval(curve, 0.2, 0.5)))
        }
    });
}

pub fn building(c: &mut Criterion) {
    let sampler = CurveSampler::default();
    let builder = RibbonBuilder::default();
    let samples = sampler.sub_interval(&CURVES.LONG, 0.0, 1.0);
    c.bench_function("build", |b| {
        b.iter(|| black_box(builder.build(&samples, CURVES.LONG.duration())))
    });
}

pub fn resolving(c: &mut Criterion) {
    let samples = CurveSampler::default().sub_interval(&CURVES.LONG, 0.0, 1.0);
    let mesh = RibbonBuilder::default().build(&samples, 1.0).unwrap();
    c.bench_function("vertex_range", |b| {
        b.iter(|| {
            for i in 0..10 {
                let start = i as f64 / 10.0;
                black_box(mesh.vertex_range(DrawRange::new(start, start + 0.25)));
            }
        })
    });
}

pub fn all(c: &mut Criterion) {
    fitting(c);
    sampling(c);
    building(c);
    resolving(c);
}
