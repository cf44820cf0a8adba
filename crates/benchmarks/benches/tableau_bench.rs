// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stab_qsim::Tableau;

const QUBIT_COUNTS: [usize; 4] = [16, 64, 256, 1024];

fn bench_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");
    for &n in &QUBIT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut t = Tableau::new(n).unwrap();
            b.iter(|| t.cnot(black_box(0), black_box(n - 1)));
        });
    }
    group.finish();
}

fn bench_hadamard(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard");
    for &n in &QUBIT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut t = Tableau::new(n).unwrap();
            b.iter(|| t.hadamard(black_box(0)));
        });
    }
    group.finish();
}

fn bench_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase");
    for &n in &QUBIT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut t = Tableau::new(n).unwrap();
            b.iter(|| t.phase(black_box(0)));
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    for &n in &QUBIT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut t = Tableau::new(n).unwrap();
                    t.hadamard(0);
                    t
                },
                |mut t| t.measure(black_box(0), false, black_box(true)),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_gaussian_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("gaussian_reduce");
    for &n in &QUBIT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut t = Tableau::new(n).unwrap();
                    for q in 0..n {
                        if q % 2 == 0 {
                            t.hadamard(q);
                        }
                        if q + 1 < n {
                            t.cnot(q, q + 1);
                        }
                    }
                    t
                },
                |mut t| t.gaussian_reduce(),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cnot,
    bench_hadamard,
    bench_phase,
    bench_measure,
    bench_gaussian_reduce
);
criterion_main!(benches);
