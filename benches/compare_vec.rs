#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use packvec::{InlineVec, SmallVec, Vec as PackVec};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("packvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = PackVec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("packvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = PackVec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("packvec small push {} values", count), |b| {
            b.iter(|| {
                let mut buf = SmallVec::<usize, 32>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        if count == SMALL_COUNT {
            c.bench_function(
                &format!("packvec inline({}) push {} values", SMALL_COUNT, count),
                |b| {
                    b.iter(|| {
                        let mut buf = InlineVec::<usize, SMALL_COUNT>::new();
                        for value in 0..count {
                            buf.push(black_box(value));
                        }
                    });
                },
            );
        }

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(
            &format!("stdvec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("packvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = PackVec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });

        c.bench_function(&format!("stdvec extend {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                buf.extend(black_box(0..count));
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
