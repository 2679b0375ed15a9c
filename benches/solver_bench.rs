//! Benchmarks for the plane-stress solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cst_solver::prelude::*;

/// Structured n x n grid on the unit square, two triangles per cell.
/// Left edge fully fixed, uniform x-load along the right edge.
fn create_grid_model(n: usize) -> (PlaneStressModel, Vec<f64>, Vec<usize>, usize) {
    let mut model = PlaneStressModel::new(Material::steel(0.01));

    let node_id = |i: usize, j: usize| j * (n + 1) + i;
    let coord = |i: usize| i as f64 / n as f64;

    for j in 0..n {
        for i in 0..n {
            let bl = [coord(i), coord(j)];
            let br = [coord(i + 1), coord(j)];
            let tr = [coord(i + 1), coord(j + 1)];
            let tl = [coord(i), coord(j + 1)];

            model
                .add_element(
                    [bl, br, tr],
                    [node_id(i, j), node_id(i + 1, j), node_id(i + 1, j + 1)],
                )
                .unwrap();
            model
                .add_element(
                    [bl, tr, tl],
                    [node_id(i, j), node_id(i + 1, j + 1), node_id(i, j + 1)],
                )
                .unwrap();
        }
    }

    let node_count = (n + 1) * (n + 1);
    let mut forces = vec![0.0; 2 * node_count];
    let mut fixed_dofs = Vec::new();

    for j in 0..=n {
        let left = node_id(0, j);
        fixed_dofs.push(2 * left);
        fixed_dofs.push(2 * left + 1);

        let right = node_id(n, j);
        forces[2 * right] = 1000.0;
    }

    (model, forces, fixed_dofs, node_count)
}

fn bench_analyze(c: &mut Criterion) {
    for n in [4, 8, 16] {
        let (model, forces, fixed_dofs, node_count) = create_grid_model(n);

        c.bench_function(&format!("analyze_grid_{n}x{n}"), |b| {
            b.iter(|| {
                let results = model
                    .analyze(black_box(&forces), black_box(&fixed_dofs), node_count)
                    .unwrap();
                black_box(results.safety_factor)
            })
        });
    }
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
