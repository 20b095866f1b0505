// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glint_input::{PointerPosition, RotationController};
use glint_math::{Mat4, Vec3};
use rand::Rng;

fn random_affine(rng: &mut impl Rng) -> Mat4 {
    let axis = Vec3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(0.1..1.0),
    );
    let r = Mat4::rotate(rng.gen_range(-3.0..3.0), &axis).unwrap();
    let s = Mat4::scale(Vec3::new(
        rng.gen_range(0.2..5.0),
        rng.gen_range(0.2..5.0),
        rng.gen_range(0.2..5.0),
    ));
    let t = Mat4::translate(Vec3::new(1.0, -2.0, 3.0));
    t.matmul(&r.matmul(&s))
}

fn bench_matmul(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let (a, b) = (random_affine(&mut rng), random_affine(&mut rng));
    c.bench_function("mat4/matmul", |bench| {
        bench.iter(|| black_box(&a).matmul(black_box(&b)));
    });
}

fn bench_inverse(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let m = random_affine(&mut rng);
    let mut group = c.benchmark_group("mat4/inverse");
    group.bench_function("inv", |bench| bench.iter(|| black_box(&m).inv()));
    group.bench_function("try_inv", |bench| {
        bench.iter(|| black_box(&m).try_inv().unwrap());
    });
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("input/drag_move", |bench| {
        let mut ctl = RotationController::new();
        ctl.drag_start(PointerPosition::new(0.0, 0.0));
        let mut x = 0.0;
        bench.iter(|| {
            x += 1.0;
            ctl.drag_move(black_box(PointerPosition::new(x, 0.5 * x)))
                .unwrap();
            black_box(ctl.rotation())
        });
    });
}

criterion_group!(benches, bench_matmul, bench_inverse, bench_drag);
criterion_main!(benches);
