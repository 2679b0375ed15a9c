//! Mathematical utilities for FEA calculations

use nalgebra::{DMatrix, DVector, Matrix3, Matrix6, SMatrix, Vector3, Vector6};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Mat6 = Matrix6<f64>;
pub type Vec3 = Vector3<f64>;
pub type Vec6 = Vector6<f64>;

/// 3x6 strain-displacement matrix for a constant strain triangle
pub type BMat = SMatrix<f64, 3, 6>;

/// Relative pivot ratio below which a Cholesky factor is treated as singular
///
/// Rigid-body modes do not always fail the factorization outright; roundoff
/// can leave a tiny positive pivot where an exact zero belongs. Comparing the
/// smallest factor pivot against the largest catches those cases.
const PIVOT_RATIO_THRESHOLD: f64 = 1e-6;

/// Solve a linear system using LU decomposition
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

/// Solve a linear system using Cholesky decomposition
///
/// Returns `None` when the matrix is not symmetric positive definite or is
/// positive definite only up to roundoff, which for a reduced stiffness
/// matrix means the structure still has rigid-body modes.
pub fn solve_cholesky(a: &Mat, b: &Vec) -> Option<Vec> {
    let chol = a.clone().cholesky()?;

    let l = chol.l_dirty();
    let mut min_pivot = f64::INFINITY;
    let mut max_pivot = 0.0_f64;
    for i in 0..l.nrows() {
        let pivot = l[(i, i)];
        min_pivot = min_pivot.min(pivot);
        max_pivot = max_pivot.max(pivot);
    }
    if min_pivot <= max_pivot * PIVOT_RATIO_THRESHOLD {
        return None;
    }

    Some(chol.solve(b))
}
