//! Constant strain triangle (CST) element
//!
//! A 3-node linear-displacement plane element. Strain (and therefore stress)
//! is uniform over the element area, so the strain-displacement matrix B is a
//! constant 3x6 matrix computed once at construction.

use crate::error::{CstError, CstResult};
use crate::math::{BMat, Mat6};
use crate::Material;

/// Area below this threshold is treated as a degenerate (collinear) triangle
const AREA_EPSILON: f64 = 1e-12;

/// Expand a connectivity triple into the 6 global DOF indices in vertex order
///
/// Node `n` owns DOFs `2n` (x-translation) and `2n + 1` (y-translation).
pub fn dof_indices(nodes: [usize; 3]) -> [usize; 6] {
    [
        2 * nodes[0],
        2 * nodes[0] + 1,
        2 * nodes[1],
        2 * nodes[1] + 1,
        2 * nodes[2],
        2 * nodes[2] + 1,
    ]
}

/// A 3-node constant strain triangle
///
/// All derived quantities (area, shape-function coefficients, B matrix) are
/// computed at construction and frozen; the geometry is immutable for the
/// element's lifetime.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Vertex coordinates [(x1, y1), (x2, y2), (x3, y3)]
    coordinates: [[f64; 2]; 3],
    /// Element area
    area: f64,
    /// Shape function coefficients a_i = x_j*y_k - x_k*y_j
    a: [f64; 3],
    /// Shape function coefficients b_i = y_j - y_k
    b: [f64; 3],
    /// Shape function coefficients c_i = x_k - x_j
    c: [f64; 3],
    /// 3x6 strain-displacement matrix
    b_matrix: BMat,
}

impl Triangle {
    /// Create a CST element from three vertex coordinates
    ///
    /// # Errors
    /// Returns `InvalidGeometry` when the vertices are collinear (zero area).
    pub fn new(coordinates: [[f64; 2]; 3]) -> CstResult<Self> {
        let [[x1, y1], [x2, y2], [x3, y3]] = coordinates;

        // Twice the signed area: det([1 x1 y1; 1 x2 y2; 1 x3 y3])
        let det = (x2 - x1) * (y3 - y1) - (x3 - x1) * (y2 - y1);
        let area = det.abs() / 2.0;

        if !(area > AREA_EPSILON) {
            return Err(CstError::InvalidGeometry(format!(
                "degenerate triangle (area = {area:e}): vertices are collinear"
            )));
        }

        let a = [
            x2 * y3 - x3 * y2,
            x3 * y1 - x1 * y3,
            x1 * y2 - x2 * y1,
        ];
        let b = [y2 - y3, y3 - y1, y1 - y2];
        let c = [x3 - x2, x1 - x3, x2 - x1];

        let inv_2a = 1.0 / (2.0 * area);
        #[rustfmt::skip]
        let b_matrix = BMat::from_row_slice(&[
            b[0], 0.0,  b[1], 0.0,  b[2], 0.0,
            0.0,  c[0], 0.0,  c[1], 0.0,  c[2],
            c[0], b[0], c[1], b[1], c[2], b[2],
        ]) * inv_2a;

        Ok(Self {
            coordinates,
            area,
            a,
            b,
            c,
            b_matrix,
        })
    }

    /// Create a CST element from a coordinate slice
    ///
    /// # Errors
    /// Returns `InvalidGeometry` when the slice does not hold exactly 3
    /// points, or when the triangle is degenerate.
    pub fn from_coords(coords: &[[f64; 2]]) -> CstResult<Self> {
        match coords {
            &[p1, p2, p3] => Self::new([p1, p2, p3]),
            _ => Err(CstError::InvalidGeometry(format!(
                "CST requires exactly 3 coordinates, got {}",
                coords.len()
            ))),
        }
    }

    /// Vertex coordinates in construction order
    pub fn coordinates(&self) -> &[[f64; 2]; 3] {
        &self.coordinates
    }

    /// Element area
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Shape function coefficients (a, b, c), one entry per vertex
    ///
    /// Shape function i evaluates as N_i(x, y) = (a_i + b_i*x + c_i*y) / (2A).
    pub fn coefficients(&self) -> ([f64; 3], [f64; 3], [f64; 3]) {
        (self.a, self.b, self.c)
    }

    /// The constant 3x6 strain-displacement matrix
    ///
    /// Maps the 6 nodal DOFs (two per vertex, in vertex order) to the strain
    /// components [eps_xx, eps_yy, gamma_xy].
    pub fn b_matrix(&self) -> &BMat {
        &self.b_matrix
    }

    /// Evaluate the three shape functions at an arbitrary point
    ///
    /// The point is not required to lie inside the triangle; outside it the
    /// values are a linear extrapolation and carry no physical meaning.
    pub fn shape_functions(&self, x: f64, y: f64) -> [f64; 3] {
        let inv_2a = 1.0 / (2.0 * self.area);
        [
            (self.a[0] + self.b[0] * x + self.c[0] * y) * inv_2a,
            (self.a[1] + self.b[1] * x + self.c[1] * y) * inv_2a,
            (self.a[2] + self.b[2] * x + self.c[2] * y) * inv_2a,
        ]
    }

    /// Local stiffness matrix K = t * A * B^T * D * B
    ///
    /// Symmetric 6x6 matrix relating nodal displacements to nodal forces in
    /// the element's vertex order.
    pub fn local_stiffness(&self, material: &Material) -> Mat6 {
        let d = material.d_matrix();
        let scale = material.thickness * self.area;
        (self.b_matrix.transpose() * d * self.b_matrix) * scale
    }
}
