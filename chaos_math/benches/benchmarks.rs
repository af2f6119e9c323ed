use chaos_math::vector::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_computed_properties(c: &mut Criterion) {
    let v = Vector2::new(3.0, 4.0);
    c.bench_function("magnitude", |b| b.iter(|| black_box(v).magnitude()));
    c.bench_function("normalized", |b| b.iter(|| black_box(v).normalized()));
    c.bench_function("bound property get", |b| {
        let v = black_box(v);
        let magnitude = v.property::<Magnitude>();
        b.iter(|| magnitude.get())
    });
}

fn bench_swizzle_writes(c: &mut Criterion) {
    c.bench_function("yx set", |b| {
        let mut v = Vector2::new(1.0, 2.0);
        b.iter(|| {
            v.yx_mut().set(black_box(Vector2::new(10.0, 20.0)));
            v
        })
    });
    c.bench_function("scalar view compound", |b| {
        let mut v = Vector2::new(1i64, 2);
        b.iter(|| {
            let mut x = v.x_mut();
            x += black_box(3);
            x.post_inc()
        })
    });
}

criterion_group!(benches, bench_computed_properties, bench_swizzle_writes);
criterion_main!(benches);
