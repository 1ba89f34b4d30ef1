//! Benchmarks for job filter recomputation
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic listing set much larger than the demo catalog.

use catalog::{Catalog, Job};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pipeline::{Category, FilterPipeline, FilterState};

fn synthetic_jobs(copies: u32) -> Vec<Job> {
    let seed = Catalog::seed();
    (0..copies)
        .flat_map(|copy| {
            seed.jobs().iter().map(move |job| {
                let mut job = job.clone();
                job.id = copy * 100 + job.id;
                job
            })
        })
        .collect()
}

fn bench_unfiltered(c: &mut Criterion) {
    let jobs = synthetic_jobs(1_000);
    let pipeline = FilterPipeline::standard();
    let state = FilterState::new();

    c.bench_function("filter_no_tokens", |b| {
        b.iter(|| black_box(pipeline.apply(black_box(&jobs), black_box(&state)).len()))
    });
}

fn bench_all_categories(c: &mut Criterion) {
    let jobs = synthetic_jobs(1_000);
    let pipeline = FilterPipeline::standard();
    let mut state = FilterState::new();
    state.toggle(Category::Role, "Developer");
    state.toggle(Category::Role, "Engineer");
    state.toggle(Category::Skill, "aws");
    state.toggle(Category::Skill, "python");
    state.toggle(Category::JobType, "Remote");

    c.bench_function("filter_all_categories", |b| {
        b.iter(|| black_box(pipeline.apply(black_box(&jobs), black_box(&state)).len()))
    });
}

criterion_group!(benches, bench_unfiltered, bench_all_categories);
criterion_main!(benches);
