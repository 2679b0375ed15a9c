//! Linear static solve and stress recovery
//!
//! Boundary conditions are applied by elimination: fixed DOFs are removed
//! from the system, the free-free submatrix is solved directly, and the fixed
//! entries of the recovered displacement vector stay exactly zero. Non-zero
//! prescribed displacements are not supported.

use log::debug;

use crate::elements::{dof_indices, Material, Triangle};
use crate::error::{CstError, CstResult};
use crate::math::{self, Mat, Vec as FEVec, Vec3, Vec6};

/// Solve the constrained system K * d = f for the nodal displacements
///
/// `fixed_dofs` lists the global DOF indices held at zero; every other DOF is
/// free. Duplicate indices are tolerated.
///
/// # Errors
/// - `Configuration` when the force vector length does not match the system
///   size, a fixed DOF index is out of range, or no free DOFs remain.
/// - `SingularMatrix` when the free-free submatrix is not positive definite,
///   i.e. the structure still has rigid-body modes.
pub fn solve_displacements(
    k_global: &Mat,
    forces: &[f64],
    fixed_dofs: &[usize],
) -> CstResult<FEVec> {
    let n_dofs = k_global.nrows();

    if forces.len() != n_dofs {
        return Err(CstError::Configuration(format!(
            "force vector length {} does not match system size {n_dofs}",
            forces.len()
        )));
    }
    if let Some(&dof) = fixed_dofs.iter().find(|&&d| d >= n_dofs) {
        return Err(CstError::Configuration(format!(
            "fixed DOF {dof} is out of range for a system of {n_dofs} DOFs"
        )));
    }

    let mut is_fixed = vec![false; n_dofs];
    for &dof in fixed_dofs {
        is_fixed[dof] = true;
    }

    let free_dofs: std::vec::Vec<usize> = (0..n_dofs).filter(|&d| !is_fixed[d]).collect();
    if free_dofs.is_empty() {
        return Err(CstError::Configuration(
            "no free degrees of freedom".to_string(),
        ));
    }

    // Partition the stiffness matrix and load vector
    let n_free = free_dofs.len();
    let mut k_ff = Mat::zeros(n_free, n_free);
    let mut f_free = FEVec::zeros(n_free);

    for (i, &di) in free_dofs.iter().enumerate() {
        f_free[i] = forces[di];
        for (j, &dj) in free_dofs.iter().enumerate() {
            k_ff[(i, j)] = k_global[(di, dj)];
        }
    }

    debug!("solving reduced system: {n_free} free of {n_dofs} DOFs");

    // The reduced matrix of a properly constrained structure is symmetric
    // positive definite, so a failed Cholesky factorization means rigid-body
    // modes remain.
    let d_free = math::solve_cholesky(&k_ff, &f_free).ok_or(CstError::SingularMatrix)?;
    if d_free.iter().any(|v| !v.is_finite()) {
        return Err(CstError::SingularMatrix);
    }

    // Scatter back into the full vector; fixed DOFs stay at zero
    let mut d = FEVec::zeros(n_dofs);
    for (i, &di) in free_dofs.iter().enumerate() {
        d[di] = d_free[i];
    }

    Ok(d)
}

/// Recover the element strain [eps_xx, eps_yy, gamma_xy] from the solved
/// displacement vector
pub fn element_strain(element: &Triangle, nodes: [usize; 3], d: &FEVec) -> Vec3 {
    let dofs = dof_indices(nodes);
    let d_local = Vec6::from_fn(|i, _| d[dofs[i]]);
    element.b_matrix() * d_local
}

/// Recover the element stress [sigma_xx, sigma_yy, tau_xy] from its strain
pub fn element_stress(material: &Material, strain: &Vec3) -> Vec3 {
    material.d_matrix() * strain
}

/// Von Mises equivalent stress for a plane-stress state
pub fn von_mises(stress: &Vec3) -> f64 {
    let (sx, sy, txy) = (stress[0], stress[1], stress[2]);
    (sx * sx + sy * sy - sx * sy + 3.0 * txy * txy).sqrt()
}
