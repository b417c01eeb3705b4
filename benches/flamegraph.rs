///
/// Use the pprof-rs profiler writing a flamegraph svg per benchmark.
///
/// Needs to be called with `--profile-time=<seconds>`
///

use criterion::{criterion_group, criterion_main, Criterion};
use pprof::criterion::{PProfProfiler, Output};
mod common;

criterion_group!{
    name = benches;
    config = Criterion::default()
    .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    ;
    targets = common::pipeline::all
}
criterion_main!(benches);
