use approx::assert_relative_eq;
use cst_solver::prelude::*;

/// Unit square split into 4 triangles sharing a center node.
///
/// Node layout: corners 0..3 counter-clockwise from the origin, node 4 at
/// the center (0.5, 0.5). 5 nodes, 10 DOFs.
fn build_unit_square_model() -> PlaneStressModel {
    let mut model = PlaneStressModel::new(Material::steel(0.01));

    model
        .add_element([[0.0, 0.0], [1.0, 0.0], [0.5, 0.5]], [0, 1, 4])
        .unwrap();
    model
        .add_element([[1.0, 1.0], [1.0, 0.0], [0.5, 0.5]], [2, 1, 4])
        .unwrap();
    model
        .add_element([[1.0, 1.0], [0.0, 1.0], [0.5, 0.5]], [2, 3, 4])
        .unwrap();
    model
        .add_element([[0.0, 0.0], [0.0, 1.0], [0.5, 0.5]], [0, 3, 4])
        .unwrap();

    model
}

fn reference_loads() -> Vec<f64> {
    let mut forces = vec![0.0; 10];
    forces[1] = 0.5;
    forces[2] = 0.5;
    forces
}

#[test]
fn unit_square_end_to_end() {
    let model = build_unit_square_model();
    let forces = reference_loads();
    let fixed_dofs = [0, 1, 6];

    let results = model.analyze(&forces, &fixed_dofs, 5).unwrap();

    assert_eq!(results.displacements.len(), 10);
    for &dof in &fixed_dofs {
        assert_eq!(results.displacements[dof], 0.0);
    }
    assert!(results.displacements.iter().all(|v| v.is_finite()));

    assert_eq!(results.strains.len(), 4);
    assert_eq!(results.stresses.len(), 4);
    for s in &results.stresses {
        assert!(s.von_mises.is_finite());
        assert!(s.von_mises >= 0.0);
    }

    assert!(results.max_von_mises > 0.0);
    assert_relative_eq!(
        results.safety_factor,
        250e6 / results.max_von_mises,
        max_relative = 1e-12
    );
    assert!(results.check.is_safe());

    eprintln!("Unit square plane-stress analysis");
    eprintln!("  max von Mises: {:.6} Pa", results.max_von_mises);
    eprintln!("  factor of safety: {:.2}", results.safety_factor);
}

#[test]
fn unit_square_is_deterministic() {
    let model = build_unit_square_model();
    let forces = reference_loads();

    let first = model.analyze(&forces, &[0, 1, 6], 5).unwrap();
    let second = model.analyze(&forces, &[0, 1, 6], 5).unwrap();

    // Repeated runs are bitwise identical
    assert_eq!(first.displacements, second.displacements);
    assert_eq!(first.max_von_mises, second.max_von_mises);
    assert_eq!(first.safety_factor, second.safety_factor);
}

#[test]
fn overload_reports_yield_exceeded_with_full_results() {
    let model = build_unit_square_model();

    // Scale the loads far past the elastic capacity of the square
    let mut forces = vec![0.0; 10];
    forces[1] = 5.0e7;
    forces[2] = 5.0e7;

    let results = model.analyze(&forces, &[0, 1, 6], 5).unwrap();

    // An unsafe structure is an analysis outcome, not an error: the result
    // arrays are still complete.
    assert!(!results.check.is_safe());
    assert!(results.safety_factor < 1.0);
    assert!(matches!(
        results.check,
        StructuralCheck::YieldExceeded { .. }
    ));
    assert_eq!(results.displacements.len(), 10);
    assert_eq!(results.strains.len(), 4);
    assert_eq!(results.stresses.len(), 4);
    assert!(results.displacements.iter().all(|v| v.is_finite()));
}

#[test]
fn under_constrained_square_is_singular() {
    let model = build_unit_square_model();
    let forces = reference_loads();

    // Two fixed DOFs leave a rigid-body rotation in the system
    let result = model.analyze(&forces, &[0, 1], 5);
    assert!(matches!(result, Err(CstError::SingularMatrix)));
}

#[test]
fn mismatched_force_vector_rejected() {
    let model = build_unit_square_model();
    let forces = vec![0.0; 8];

    let result = model.analyze(&forces, &[0, 1, 6], 5);
    assert!(matches!(result, Err(CstError::Configuration(_))));
}
