use criterion::black_box;
use splinetrail::{fit, CurveInstance, DrawRange, Sample};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let points: Vec<Sample> = (0..50)
        .map(|i| {
            let t = i as f64 * 0.03;
            Sample::new(50.0 * t, 20.0 * (3.0 * t).sin(), t)
        })
        .collect();

    let profiler = dhat::Profiler::new_heap();
    let curve = fit(&points).unwrap();
    black_box(curve.evaluate(0.5));
    black_box(&curve);
    drop(profiler);

    let mut instance = CurveInstance::default();
    instance.update_curve(curve);
    let profiler = dhat::Profiler::new_heap();
    instance.rebuild().unwrap();
    instance.set_draw_range(DrawRange::new(0.25, 0.75));
    black_box(instance.vertex_range());
    drop(profiler);
}
