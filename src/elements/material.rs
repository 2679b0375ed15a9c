//! Material properties for plane-stress analysis

use serde::{Deserialize, Serialize};

use crate::error::{CstError, CstResult};
use crate::math::Mat3;

/// Material properties shared by all elements in an analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Element thickness in m
    pub thickness: f64,
    /// Yield strength (optional) in Pa
    pub fy: Option<f64>,
}

impl Material {
    /// Create a new material with given properties
    ///
    /// # Errors
    /// Returns `InvalidMaterial` if E or the thickness is not positive, or if
    /// the Poisson ratio is outside (-1, 1).
    pub fn new(e: f64, nu: f64, thickness: f64) -> CstResult<Self> {
        if !(e > 0.0) {
            return Err(CstError::InvalidMaterial(format!(
                "Young's modulus must be positive, got {e}"
            )));
        }
        if !(nu.abs() < 1.0) {
            return Err(CstError::InvalidMaterial(format!(
                "Poisson's ratio must satisfy |nu| < 1, got {nu}"
            )));
        }
        if !(thickness > 0.0) {
            return Err(CstError::InvalidMaterial(format!(
                "Thickness must be positive, got {thickness}"
            )));
        }
        Ok(Self {
            e,
            nu,
            thickness,
            fy: None,
        })
    }

    /// Attach a yield strength for safety-factor reporting
    pub fn with_yield_strength(mut self, fy: f64) -> Self {
        self.fy = Some(fy);
        self
    }

    /// Create a standard structural steel material (10 mm plate)
    pub fn steel(thickness: f64) -> Self {
        Self {
            e: 200e9,        // 200 GPa
            nu: 0.3,
            thickness,
            fy: Some(250e6), // 250 MPa
        }
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum(thickness: f64) -> Self {
        Self {
            e: 68.9e9,       // 68.9 GPa
            nu: 0.33,
            thickness,
            fy: Some(276e6), // 276 MPa
        }
    }

    /// Plane-stress constitutive matrix
    ///
    /// D = E / (1 - nu^2) * [[1, nu, 0], [nu, 1, 0], [0, 0, (1 - nu) / 2]]
    pub fn d_matrix(&self) -> Mat3 {
        let f = self.e / (1.0 - self.nu * self.nu);
        Mat3::new(
            f,
            f * self.nu,
            0.0,
            f * self.nu,
            f,
            0.0,
            0.0,
            0.0,
            f * (1.0 - self.nu) / 2.0,
        )
    }
}
