use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rayray_math::{Matrix, Transform, Tuple};

fn matrix_a() -> Matrix {
    Matrix::new([
        [2.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 8.0, 7.0, 6.0],
        [5.0, 4.0, 3.0, 3.0],
    ])
}

fn matrix_b() -> Matrix {
    Matrix::new([
        [3.0, 1.0, 2.0, 3.0],
        [3.0, 2.0, 1.0, -1.0],
        [4.0, 3.0, 6.0, 5.0],
        [1.0, 2.0, 7.0, 8.0],
    ])
}

pub fn bench_matrix_creation(c: &mut Criterion) {
    c.bench_function("matrix_creation", |b| b.iter(matrix_a));
}

pub fn bench_matrix_multiplication(c: &mut Criterion) {
    let a = matrix_a();
    let m = matrix_b();
    c.bench_function("matrix_multiplication", |b| {
        b.iter(|| black_box(&a) * black_box(&m));
    });
}

pub fn bench_matrix_transposition(c: &mut Criterion) {
    let a = matrix_a();
    c.bench_function("matrix_transposition", |b| {
        b.iter(|| black_box(&a).transposed());
    });
}

pub fn bench_matrix_determinant(c: &mut Criterion) {
    let a = matrix_a();
    c.bench_function("matrix_determinant", |b| {
        b.iter(|| black_box(&a).determinant());
    });
}

pub fn bench_matrix_inversion(c: &mut Criterion) {
    let a = matrix_a();
    c.bench_function("matrix_inversion", |b| {
        b.iter(|| black_box(&a).inverted());
    });
}

pub fn bench_transform_application(c: &mut Criterion) {
    let transform = Transform::translation(&Tuple::vector(1.0, 2.0, 3.0))
        * Transform::scaling(&Tuple::vector(2.0, 2.0, 2.0));
    let point = Tuple::point(1.0, -1.0, 0.5);
    c.bench_function("transform_application", |b| {
        b.iter(|| black_box(&transform) * black_box(&point));
    });
}

criterion_group!(
    benches,
    bench_matrix_creation,
    bench_matrix_multiplication,
    bench_matrix_transposition,
    bench_matrix_determinant,
    bench_matrix_inversion,
    bench_transform_application
);
criterion_main!(benches);
