use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vec3d::{ops, Vector};

fn bench_arithmetic(c: &mut Criterion) {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(4.0, 5.0, 6.0);

    c.bench_function("add allocating", |bench| {
        bench.iter(|| ops::add(black_box(a), black_box(b)))
    });

    c.bench_function("add into", |bench| {
        let mut out = Vector::ZERO;
        bench.iter(|| {
            ops::add_into(black_box(a), black_box(b), &mut out);
        })
    });

    c.bench_function("cross", |bench| bench.iter(|| black_box(a).cross(black_box(b))));
    c.bench_function("angle_to", |bench| {
        bench.iter(|| black_box(a).angle_to(black_box(b)))
    });
}

fn bench_random_direction(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("random_direction", |bench| {
        bench.iter(|| Vector::random_direction_with(&mut rng))
    });
}

criterion_group!(benches, bench_arithmetic, bench_random_direction);
criterion_main!(benches);
