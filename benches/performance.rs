// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for SWIRL
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Chord progression and scale construction
//! - Full composition generation
//! - Serialization throughput

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use swirl::composition::{compose, TICKS_PER_BEAT};
use swirl::config::GenParams;
use swirl::export;
use swirl::music::{ChordProgression, MelodyScale};

fn bench_params(measures: u32) -> GenParams {
    GenParams {
        measures,
        beats_per_measure: 4,
        tempo_bpm: 120,
        output: "bench.mid".into(),
        seed: Some(1),
    }
}

/// Benchmark chord progression construction
fn bench_progression(c: &mut Criterion) {
    let mut group = c.benchmark_group("progression");

    for size in [8usize, 64, 256].iter() {
        group.bench_with_input(BenchmarkId::new("generate", size), size, |b, &size| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(1);
                black_box(ChordProgression::generate(&mut rng, size))
            })
        });
    }

    group.finish();
}

/// Benchmark melody scale construction
fn bench_scale(c: &mut Criterion) {
    c.bench_function("melody_scale", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(2);
            black_box(MelodyScale::generate(&mut rng))
        })
    });
}

/// Benchmark one pattern generator in isolation
fn bench_bass_generator(c: &mut Criterion) {
    let mut setup_rng = StdRng::seed_from_u64(3);
    let progression = ChordProgression::generate(&mut setup_rng, 64);

    c.bench_function("bass_64_chords", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(4);
            black_box(swirl::generators::bass::generate(
                &mut rng,
                &progression,
                4,
                TICKS_PER_BEAT,
            ))
        })
    });
}

/// Benchmark the full generation pass
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for measures in [16u32, 64, 256].iter() {
        group.bench_with_input(
            BenchmarkId::new("measures", measures),
            measures,
            |b, &measures| {
                let params = bench_params(measures);
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(5);
                    black_box(compose(&mut rng, &params))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark serialization of a finished composition
fn bench_serialize(c: &mut Criterion) {
    let params = bench_params(64);
    let mut setup_rng = StdRng::seed_from_u64(6);
    let composition = compose(&mut setup_rng, &params);

    c.bench_function("serialize_64_measures", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            black_box(export::to_bytes(&composition, &mut rng))
        })
    });
}

criterion_group!(
    benches,
    bench_progression,
    bench_scale,
    bench_bass_generator,
    bench_compose,
    bench_serialize
);
criterion_main!(benches);
